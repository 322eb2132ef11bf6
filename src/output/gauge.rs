//! Horizontal score gauge for terminal and markdown output

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render `score` (0-100) as a bar of `width` cells followed by the percentage.
pub fn render_gauge(score: u8, width: usize) -> String {
    let score = score.min(100);
    let filled = (usize::from(score) * width + 50) / 100;
    let mut bar = String::with_capacity(width * 3 + 8);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar.push(']');
    bar.push_str(&format!(" {}%", score));
    bar
}
