use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::Bed;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

pub fn bed_to_svg(bed: &Bed, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;

    let (x_min, y_min, x_max, y_max) = bed.outline().iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(x_min, y_min, x_max, y_max), p| {
            (x_min.min(p.0), y_min.min(p.1), x_max.max(p.0), y_max.max(p.1))
        },
    );
    let (width, height) = ((x_max - x_min) as f32, (y_max - y_min) as f32);
    let (x_min, y_top) = (x_min as f32, -y_max as f32);

    //10% padding around the bed, y is flipped so the top of the bed is at -y_max
    let vbox = (
        x_min - 0.05 * width,
        y_top - 0.05 * height,
        1.10 * width,
        1.10 * height,
    );

    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the bed
        let label_content = format!(
            "boxes: {} | margin: {} | density: {:.3}% | {}",
            bed.placed_boxes().len(),
            bed.margin(),
            bed.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", x_min)
            .set("y", y_top - 0.5 * 0.025 * f32::min(width, height))
            .set("font-size", f32::min(width, height) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw bed
    let bed_group = {
        let c = bed.center();
        let title = Title::new(format!(
            "bed, shape: {:?}, center: {c}, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            bed.shape(),
            x_min,
            y_min,
            x_max,
            y_max
        ));
        Group::new()
            .set("id", "bed")
            .add(svg_util::data_to_path(
                svg_util::polygon_data(bed.outline()),
                &[
                    ("fill", &*format!("{}", theme.bed_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(svg_util::point(c, None, Some(2.0 * stroke_width)))
            .add(title)
    };

    //draw boxes
    let boxes_group = {
        let box_stroke = svg_util::change_brightness(theme.box_fill, 0.5);
        let font_size = f32::min(width, height) * 0.02;
        let mut boxes_group = Group::new().set("id", "boxes");
        for (i, pb) in bed.placed_boxes().iter().enumerate() {
            let title = Title::new(format!(
                "box {i}, center: {}, size: {} x {}",
                pb.center(),
                pb.width(),
                pb.height()
            ));
            let mut box_group = Group::new()
                .set("id", format!("box_{i}"))
                .add(svg_util::data_to_path(
                    svg_util::polygon_data(&pb.hull()),
                    &[
                        ("fill", &*format!("{}", theme.box_fill)),
                        ("fill-opacity", "0.8"),
                        ("stroke", &*format!("{box_stroke}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(title);
            if options.label_boxes {
                box_group = box_group.add(
                    Text::new(format!("{i}"))
                        .set("x", pb.center().0 as f32)
                        .set("y", -pb.center().1 as f32)
                        .set("transform", "scale(1,-1)")
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            boxes_group = boxes_group.add(box_group);
        }
        boxes_group
    };

    //draw the hull around all boxes (if enabled)
    let hull_group = match options.placed_hull && bed.placed_boxes().len() > 1 {
        false => None,
        true => Some(
            Group::new().set("id", "placed_hull").add(svg_util::data_to_path(
                svg_util::polygon_data(&bed.placed_hull()),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.hull_stroke)),
                    ("stroke-opacity", "0.5"),
                    ("stroke-width", &*format!("{stroke_width}")),
                    (
                        "stroke-dasharray",
                        &*format!("{} {}", 2.0 * stroke_width, 4.0 * stroke_width),
                    ),
                    ("stroke-linecap", "round"),
                    ("stroke-linejoin", "round"),
                ],
            )),
        ),
    };

    //outline the anchor (if enabled)
    let anchor_group = match (options.highlight_anchor, bed.last_box()) {
        (true, Some(anchor)) => Some(
            Group::new().set("id", "anchor").add(svg_util::data_to_path(
                svg_util::polygon_data(&anchor.hull()),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.anchor_stroke)),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )),
        ),
        _ => None,
    };

    let optionals = [hull_group, anchor_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    //bed coordinates have y pointing up, svg has it pointing down
    let content = Group::new()
        .set("id", "content")
        .set("transform", "scale(1,-1)")
        .add(bed_group)
        .add(boxes_group)
        .add(optionals);

    Document::new()
        .set("viewBox", vbox)
        .add(content)
        .add(label)
}
