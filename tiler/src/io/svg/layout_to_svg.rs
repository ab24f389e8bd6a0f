use crate::composer::Scene;
use crate::entities::{Instance, TileClass};
use crate::geometry::primitives::Rect;
use crate::io::svg::SvgDrawOptions;
use crate::placement::LayoutSolution;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Draws all walls of `instance` side by side, with the tiles of `solution`, the wall outlines
/// and the cutouts on top. The stroke of each tile reflects how it was obtained.
pub fn layout_to_svg(
    instance: &Instance,
    solution: &LayoutSolution,
    options: SvgDrawOptions,
) -> Document {
    let scene = Scene::compose(&instance.walls);
    let theme = options.theme.get_theme();

    let tile_rects = solution
        .tiles
        .iter()
        .filter_map(|t| scene.to_scene_rect(&t.wall_label, t.rect()).map(|r| (t, r)))
        .collect::<Vec<_>>();

    //rows are not clipped vertically, tiles may extend below the walls
    let bbox = tile_rects
        .iter()
        .fold(scene.bbox(), |acc, (_, r)| Rect::bounding_rect(acc, *r));
    let unit = f32::max(bbox.width(), bbox.height());
    let stroke_width = unit * 0.001 * theme.stroke_width_multiplier;
    let font_size = unit * 0.02;
    let label_space = match options.draw_labels {
        true => 2.5 * font_size,
        false => 0.0,
    };
    let margin = unit * 0.025;

    let tiles_group = tile_rects
        .iter()
        .fold(Group::new().set("id", "tiles"), |group, (tile, r)| {
            let width_mult = match tile.class {
                TileClass::ReusedCut => 1.5,
                _ => 1.0,
            };
            group.add(
                rect_element(r)
                    .set("fill", theme.tile_fill.to_string())
                    .set("stroke", theme.tile_stroke(tile.class).to_string())
                    .set("stroke-width", stroke_width * width_mult)
                    .add(Title::new(format!(
                        "{:?} tile on {}, [x: {:.2}, y: {:.2}, width: {:.2}, height: {:.2}]",
                        tile.class, tile.wall_label, tile.x, tile.y, tile.width, tile.height
                    ))),
            )
        });

    let walls_group = scene
        .frames
        .iter()
        .fold(Group::new().set("id", "walls"), |group, frame| {
            let outline = frame.outline();
            let group = group.add(
                rect_element(&outline)
                    .set("fill", "none")
                    .set("stroke", theme.wall_stroke.to_string())
                    .set("stroke-width", 2.0 * stroke_width)
                    .add(Title::new(format!(
                        "{}, {:.2} x {:.2}",
                        frame.label, frame.width, frame.height
                    ))),
            );
            match options.draw_labels {
                true => {
                    let (cx, _) = outline.centroid();
                    group.add(
                        text_element(&frame.label, cx, -font_size, font_size)
                            .set("fill", theme.text_fill.to_string()),
                    )
                }
                false => group,
            }
        });

    let cutouts_group = instance
        .cutouts
        .iter()
        .filter_map(|c| scene.to_scene_rect(&c.wall_label, c.rect()).map(|r| (c, r)))
        .fold(Group::new().set("id", "cutouts"), |group, (cutout, r)| {
            let group = group.add(
                rect_element(&r)
                    .set("fill", theme.cutout_fill.to_string())
                    .set("stroke", theme.cutout_fill.change_brightness(0.5).to_string())
                    .set("stroke-width", stroke_width)
                    .add(Title::new(format!("cutout {} on {}", cutout.name, cutout.wall_label))),
            );
            match options.draw_labels {
                true => {
                    let (cx, cy) = r.centroid();
                    let size = f32::min(0.6 * font_size, r.height());
                    group.add(
                        text_element(&cutout.name, cx, cy, size)
                            .set("dominant-baseline", "middle")
                            .set("fill", theme.text_fill.to_string()),
                    )
                }
                false => group,
            }
        });

    let vbox = (
        bbox.x_min - margin,
        bbox.y_min - margin - label_space,
        bbox.width() + 2.0 * margin,
        bbox.height() + 2.0 * margin + label_space,
    );

    Document::new()
        .set("viewBox", vbox)
        .add(Title::new(format!(
            "{}: {} full, {} cut, {} scraps reused",
            instance.name, solution.full_tiles, solution.cut_tiles, solution.scraps_reused
        )))
        .add(tiles_group)
        .add(walls_group)
        .add(cutouts_group)
}

fn rect_element(r: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", r.x_min)
        .set("y", r.y_min)
        .set("width", r.width())
        .set("height", r.height())
}

fn text_element(content: &str, x: f32, y: f32, font_size: f32) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-size", font_size)
        .set("font-family", "sans-serif")
        .set("text-anchor", "middle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Cutout, GroutSpec, PatternStyle, TileSpec, Wall};
    use crate::io::svg::SvgTheme;
    use crate::placement::compute_layout;

    #[test]
    fn draws_every_tile_wall_and_cutout() {
        let instance = Instance::new(
            "svg",
            vec![
                Wall::new("Wall A", 30.0, 20.0).unwrap(),
                Wall::new("Wall B", 15.0, 20.0).unwrap(),
            ],
            TileSpec::new(10.0, 10.0).unwrap(),
            GroutSpec::none(),
            PatternStyle::Straight,
            true,
            vec![Cutout::new("valve", "Wall B", (2.0, 2.0), (4.0, 4.0)).unwrap()],
        )
        .unwrap();
        let solution = compute_layout(&instance);
        let doc = layout_to_svg(&instance, &solution, SvgDrawOptions::default()).to_string();

        //tiles + wall outlines + cutouts
        let n_rects = doc.matches("<rect").count();
        assert_eq!(n_rects, solution.tiles.len() + 2 + 1);
        assert!(doc.contains("Wall A"));
        assert!(doc.contains("valve"));
        //reused cut on wall B is drawn in blue
        assert!(doc.contains("#0000FF"));

        let plain = SvgDrawOptions {
            theme: SvgTheme::Gray,
            draw_labels: false,
        };
        let doc = layout_to_svg(&instance, &solution, plain).to_string();
        assert!(!doc.contains("<text"));
    }
}
