use std::fmt;

/// The kind of sponsored video a partner can book. This is the field that
/// drives the coupled pricing tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoType {
    Short,
    Dedicated,
}

/// Price/package label shown next to a video type. Always derived from
/// [`VideoType`], never stored on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricingTier {
    ShortVideo,
    DedicatedVideo,
}

// Single mapping table between the two coupled fields.
const PACKAGES: [(VideoType, PricingTier); 2] = [
    (VideoType::Short, PricingTier::ShortVideo),
    (VideoType::Dedicated, PricingTier::DedicatedVideo),
];

impl VideoType {
    pub const ALL: [VideoType; 2] = [VideoType::Short, VideoType::Dedicated];

    pub fn label(self) -> &'static str {
        match self {
            VideoType::Short => "Short Video",
            VideoType::Dedicated => "Dedicated Video",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }

    /// Short form used in `/partner?video=` links.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "short" => Some(VideoType::Short),
            "dedicated" => Some(VideoType::Dedicated),
            _ => None,
        }
    }

    pub fn pricing_tier(self) -> PricingTier {
        PACKAGES
            .iter()
            .find(|(video, _)| *video == self)
            .map(|(_, tier)| *tier)
            .unwrap_or(PricingTier::ShortVideo)
    }
}

impl PricingTier {
    pub fn label(self) -> &'static str {
        match self {
            PricingTier::ShortVideo => "$50 - Short Video",
            PricingTier::DedicatedVideo => "$150 - Dedicated Video",
        }
    }

    pub fn price_usd(self) -> u32 {
        match self {
            PricingTier::ShortVideo => 50,
            PricingTier::DedicatedVideo => 150,
        }
    }

    pub fn video_type(self) -> VideoType {
        PACKAGES
            .iter()
            .find(|(_, tier)| *tier == self)
            .map(|(video, _)| *video)
            .unwrap_or(VideoType::Short)
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactRequest {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartnershipRequest {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub product_url: String,
    pub video_type: Option<VideoType>,
    pub message: String,
}

/// Free-text fields of the partnership form. The video type has its own
/// setter and the pricing tier has none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartnershipField {
    Name,
    Email,
    CompanyName,
    ProductUrl,
    Message,
}

impl PartnershipRequest {
    pub fn set(&mut self, field: PartnershipField, value: String) {
        match field {
            PartnershipField::Name => self.name = value,
            PartnershipField::Email => self.email = value,
            PartnershipField::CompanyName => self.company_name = value,
            PartnershipField::ProductUrl => self.product_url = value,
            PartnershipField::Message => self.message = value,
        }
    }

    pub fn pricing_tier(&self) -> Option<PricingTier> {
        self.video_type.map(VideoType::pricing_tier)
    }

    pub fn pricing_label(&self) -> &'static str {
        self.pricing_tier().map(PricingTier::label).unwrap_or("")
    }

    pub fn video_label(&self) -> &'static str {
        self.video_type.map(VideoType::label).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_type_drives_pricing_tier() {
        assert_eq!(VideoType::Short.pricing_tier().label(), "$50 - Short Video");
        assert_eq!(VideoType::Dedicated.pricing_tier().label(), "$150 - Dedicated Video");
    }

    #[test]
    fn mapping_table_is_symmetric() {
        for video in VideoType::ALL {
            assert_eq!(video.pricing_tier().video_type(), video);
        }
    }

    #[test]
    fn labels_and_slugs_parse() {
        assert_eq!(VideoType::from_label("Dedicated Video"), Some(VideoType::Dedicated));
        assert_eq!(VideoType::from_label(""), None);
        assert_eq!(VideoType::from_slug(" Short "), Some(VideoType::Short));
        assert_eq!(VideoType::from_slug("premium"), None);
    }

    #[test]
    fn unselected_video_type_has_no_pricing() {
        let request = PartnershipRequest::default();
        assert_eq!(request.pricing_tier(), None);
        assert_eq!(request.pricing_label(), "");
    }
}
