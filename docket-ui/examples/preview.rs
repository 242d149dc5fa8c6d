//! Docket preview - render a composed screen to a PNG, without a window.
//!
//! Run with: `DOCKET_FONT=/path/to/font.ttf cargo run -p docket-ui --example preview`

use std::rc::Rc;

use docket_ui::{Block, Button, DocketTheme, InputBox, RowFields, Table, Widget};
use slate::{Color, FontRenderer, Point, Rect, SharedTextRenderer, Surface};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let font_path = match std::env::var("DOCKET_FONT") {
        Ok(path) => path,
        Err(_) => {
            eprintln!("set DOCKET_FONT to a .ttf file to render the preview");
            std::process::exit(2);
        }
    };
    let renderer: SharedTextRenderer = Rc::new(
        FontRenderer::from_file(font_path.as_ref()).expect("failed to load preview font"),
    );

    let mut window = Surface::new(1280, 720, Color::rgb(0.07, 0.07, 0.09));

    let search = InputBox::new(
        Rect::new(40.0, 30.0, 400.0, 40.0),
        DocketTheme::WHITE,
        22.0,
        DocketTheme::BLACK,
        "Search...",
        renderer.clone(),
    );
    let search_button = Button::new(
        Rect::new(460.0, 30.0, 120.0, 40.0),
        "Search",
        DocketTheme::BLUE,
        DocketTheme::WHITE,
        22.0,
        renderer.clone(),
    );
    let delete_button = Button::new(
        Rect::new(600.0, 30.0, 120.0, 40.0),
        "Delete",
        DocketTheme::RED,
        DocketTheme::WHITE,
        22.0,
        renderer.clone(),
    );
    let panel = Table::new(Rect::new(740.0, 30.0, 500.0, 280.0), None)
        .expect("flat panel construction cannot fail");

    let mut rows = Vec::new();
    for (i, (name, kind)) in [("Alice", "Theft"), ("Bob", "Fraud"), ("Carol", "Arson")]
        .into_iter()
        .enumerate()
    {
        let mut row = Block::new(
            Rect::new(40.0, 100.0 + 70.0 * i as f32, 680.0, 60.0),
            DocketTheme::BG_ROW,
            DocketTheme::BG_ROW_HOVER,
            &RowFields {
                name: name.into(),
                id: format!("ID{}", i + 1),
                gender: "F".into(),
                birth: "2000-01-01".into(),
                kind: kind.into(),
                location: "NYC".into(),
                time: "2024-01-01 00:00".into(),
            },
            20.0,
            renderer.clone(),
        );
        // Highlight the second row as if the pointer were over it.
        if i == 1 {
            row.handle_mouse_hover(Point::new(100.0, 200.0));
        }
        rows.push(row);
    }

    let mut widgets: Vec<&dyn Widget> = vec![&search as &dyn Widget, &search_button, &delete_button, &panel];
    widgets.extend(rows.iter().map(|r| r as &dyn Widget));
    for widget in widgets {
        widget.draw(&mut window);
    }

    window
        .as_image()
        .save("docket-preview.png")
        .expect("failed to write preview image");
    println!("wrote docket-preview.png");
}
