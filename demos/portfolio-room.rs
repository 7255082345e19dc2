use panel_text::layout::Margins;
use panel_text::{Align, Dispatcher, EventKind, Font, Panel, PanelFont, Px, Room};

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: portfolio-room <font.ttf>");
            std::process::exit(1);
        }
    };
    let bytes = std::fs::read(path).expect("can read font file");
    let font = Font::load(bytes).expect("can load font");

    // the floor copy breathes a little: double the face's natural line height
    let floor_size = Px(28.0);
    let floor_leading = font.line_height(floor_size) * 2.0;

    let mut room = Room::default();
    let font = room.add_font(font);

    // wall plaques: 1024x512 textures wrapped to a 900px column
    let wall = |text: &str| {
        Panel::new(
            (Px(1024.0), Px(512.0)),
            text,
            PanelFont {
                id: font,
                size: Px(36.0),
            },
        )
        .with_padding(Margins::symmetric(Px(0.0), Px(62.0)))
        .with_leading(Px(48.0))
        .with_first_baseline(Px(70.0))
    };

    room.add_panel(wall(
        "Projects\n\n3D portfolio room\nresume builder\nplatformer game\nreal estate system",
    ));
    room.add_panel(wall(
        "Skills\n\nHTML\nCSS\nJavaScript\nPHP\nRust\nMySQL\nLinux",
    ));

    // floor inscription, left as a single wrapping paragraph
    room.add_panel(
        Panel::new(
            (Px(1024.0), Px(1024.0)),
            "Hello! I am a college student with a keen interest in web development \
             and technology, always curious about the tools that inspire me.",
            PanelFont {
                id: font,
                size: floor_size,
            },
        )
        .with_leading(floor_leading)
        .with_first_baseline(Px(200.0))
        .with_align(Align::Center),
    );

    // contact buttons: small 512x128 faces with a single label each
    let mut dispatcher = Dispatcher::default();
    for label in ["Email", "Call", "LinkedIn"] {
        let id = room.add_panel(Panel::new(
            (Px(512.0), Px(128.0)),
            label,
            PanelFont {
                id: font,
                size: Px(42.0),
            },
        ));
        let label = label.to_string();
        dispatcher.on(id, EventKind::Pick, move || {
            println!("-> open {label} link");
        });
    }

    for (id, layout) in room.layout_all().expect("room lays out") {
        let index = room.index_of_panel(id).expect("panel is in the room");
        println!(
            "panel {index}: {}x{} ({:?})",
            layout.extent.0, layout.extent.1, layout.align
        );
        for span in &layout.lines {
            println!("  ({:>7.1}, {:>7.1}) {:?}", span.coords.0 .0, span.coords.1 .0, span.text);
        }
    }

    // simulate a click on the last button
    if let Some(id) = room.id_of_panel_index(room.panel_order.len() - 1) {
        dispatcher.dispatch(id, EventKind::Pick);
    }
}
