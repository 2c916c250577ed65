use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

/// Audience share by segment, in percent.
pub const AUDIENCE: [(&str, u32); 4] = [
    ("Tech Professionals", 45),
    ("Students", 30),
    ("Business Owners", 15),
    ("Others", 10),
];

const CYAN: RGBColor = RGBColor(6, 182, 212);
const PANEL: RGBColor = RGBColor(26, 26, 26);

fn draw(canvas: HtmlCanvasElement) -> Result<(), String> {
    canvas.set_width(560);
    canvas.set_height(320);

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&PANEL).map_err(|e| format!("{:?}", e))?;

    let max = AUDIENCE.iter().map(|(_, share)| *share).max().unwrap_or(100);
    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(44)
        .build_cartesian_2d(0..AUDIENCE.len(), 0..max + max / 10)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(AUDIENCE.len())
        .x_label_formatter(&|x| {
            AUDIENCE
                .get(*x)
                .map(|(segment, _)| segment.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("{}%", y))
        .label_style(("sans-serif", 13).into_font().color(&WHITE))
        .axis_style(&WHITE.mix(0.3))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(AUDIENCE.iter().enumerate().map(|(i, (_, share))| {
            let mut bar = Rectangle::new([(i, 0), (i + 1, *share)], CYAN.mix(0.8).filled());
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[function_component(AudienceChart)]
pub fn audience_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas) {
                        warn!("Audience chart not drawn: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="audience-chart">
            <canvas ref={canvas_ref} width="560" height="320" style="max-width: 100%;" />
        </div>
    }
}
