use lj_mc::Domain;
use nalgebra::Vector2;

/// Render positions as a character grid whose axes span exactly the domain.
///
/// Cells holding one particle show `.`, two to four `o`, more `@`. The
/// frame is drawn outside the plotting area so border particles stay visible.
pub fn render_scatter(positions: &[Vector2<f64>], domain: &Domain, width: usize) -> String {
    let width = width.max(2);
    // Terminal cells are roughly twice as tall as wide
    let height = ((width as f64 * domain.height() / domain.width()) / 2.0)
        .round()
        .max(2.0) as usize;

    let mut counts = vec![vec![0usize; width]; height];
    for p in positions.iter().filter(|p| domain.contains(p)) {
        let col = ((p.x - domain.x_min) / domain.width() * (width - 1) as f64).round() as usize;
        let row = ((domain.y_max - p.y) / domain.height() * (height - 1) as f64).round() as usize;
        counts[row.min(height - 1)][col.min(width - 1)] += 1;
    }

    let mut out = String::with_capacity((width + 3) * (height + 2));
    let border = format!("+{}+\n", "-".repeat(width));
    out.push_str(&border);
    for row in &counts {
        out.push('|');
        out.extend(row.iter().map(|&n| match n {
            0 => ' ',
            1 => '.',
            2..=4 => 'o',
            _ => '@',
        }));
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push_str(&format!(
        "x: [{}, {}]  y: [{}, {}]",
        domain.x_min, domain.x_max, domain.y_min, domain.y_max
    ));
    out
}
