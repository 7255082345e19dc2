use panel_text::layout::wrap_text;
use panel_text::Px;

fn main() {
    // a fixed-advance measurer stands in for real glyph metrics
    let measure = |s: &str| Px(s.chars().count() as f32 * 18.0);

    let text = lipsum::lipsum(80);
    let lines = wrap_text(&measure, &text, Px(900.0)).expect("can wrap text");

    for line in &lines {
        println!("{:>6.1}px | {line}", measure(line).0);
    }
    println!("{} lines", lines.len());
}
