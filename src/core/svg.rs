use crate::domain::model::HandAngles;
use std::fmt::Write;

const CENTER: f64 = 100.0;
const NUMERAL_RADIUS: f64 = 80.0;

struct Hand {
    length: f64,
    color: &'static str,
    width: u32,
    glow: u32,
}

const HOUR_HAND: Hand = Hand { length: 50.0, color: "#fff", width: 6, glow: 3 };
const MINUTE_HAND: Hand = Hand { length: 70.0, color: "#00ccff", width: 4, glow: 3 };
const SECOND_HAND: Hand = Hand { length: 80.0, color: "#ff00aa", width: 2, glow: 4 };

/// Point at `radius` from the centre, `degrees` clockwise from twelve o'clock.
pub fn dial_point(degrees: f64, radius: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (CENTER + radius * rad.sin(), CENTER - radius * rad.cos())
}

fn push_hand(out: &mut String, angle: f64, hand: &Hand) {
    let (x2, y2) = dial_point(angle, hand.length);
    let _ = write!(
        out,
        r#"<line x1="100" y1="100" x2="{x2:.2}" y2="{y2:.2}" stroke="{c}" stroke-width="{w}" stroke-linecap="round" style="filter:drop-shadow(0 0 {g}px {c})"/>"#,
        c = hand.color,
        w = hand.width,
        g = hand.glow,
    );
}

/// Inline SVG face with numerals and three hands, sized for a dashboard card.
pub fn analog_clock_svg(angles: &HandAngles) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(
        r#"<svg width="180" height="180" viewBox="0 0 200 200" style="background:rgba(0,0,0,0.3);border-radius:50%;border:2px solid rgba(102,204,255,0.3)">"#,
    );

    for i in 1..=12u32 {
        let (x, y) = dial_point(f64::from(i) * 30.0, NUMERAL_RADIUS);
        let _ = write!(
            out,
            r##"<text x="{x:.2}" y="{y:.2}" fill="#00ccff" font-size="16" font-family="Orbitron" text-anchor="middle" alignment-baseline="middle">{i}</text>"##,
        );
    }

    push_hand(&mut out, angles.hour, &HOUR_HAND);
    push_hand(&mut out, angles.minute, &MINUTE_HAND);
    push_hand(&mut out, angles.second, &SECOND_HAND);

    out.push_str(
        r##"<circle cx="100" cy="100" r="6" fill="#ff00aa" style="filter:drop-shadow(0 0 5px #ff00aa)"/>"##,
    );
    out.push_str("</svg>");
    out
}

/// Same face as a standalone document, for `world-clock svg`.
pub fn standalone_svg(angles: &HandAngles) -> String {
    let inline = analog_clock_svg(angles);
    let body = inline.replacen("<svg ", r#"<svg xmlns="http://www.w3.org/2000/svg" "#, 1);
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n", body)
}
