use plotters::style::RGBColor;

/// Bar colors assigned to year columns, cycling when the span outruns the
/// palette. ColorBrewer Oranges and PuBuGn ramps plus two Accent entries.
pub const YEAR_COLORS: [RGBColor; 20] = [
    // Oranges - 9
    RGBColor(102, 37, 6),
    RGBColor(153, 52, 4),
    RGBColor(204, 76, 2),
    RGBColor(236, 112, 20),
    RGBColor(254, 153, 41),
    RGBColor(254, 196, 79),
    RGBColor(254, 227, 145),
    RGBColor(255, 247, 188),
    RGBColor(255, 255, 229),
    // PuBuGn - 9
    RGBColor(1, 70, 54),
    RGBColor(1, 108, 89),
    RGBColor(2, 129, 138),
    RGBColor(54, 144, 192),
    RGBColor(103, 169, 207),
    RGBColor(166, 189, 219),
    RGBColor(208, 209, 230),
    RGBColor(236, 226, 240),
    RGBColor(255, 247, 251),
    // Accent - 2
    RGBColor(127, 201, 127),
    RGBColor(190, 174, 212),
];

/// Color for the year column at `index`.
pub fn year_color(index: usize) -> RGBColor {
    YEAR_COLORS[index % YEAR_COLORS.len()]
}
