//! Transforms of the selected nodes (translate, rotate, scale).
//!
//! Each transform is one macro. With `copy`, new nodes are added at the
//! transformed positions and the originals stay put. Without `copy`, the
//! selected nodes are moved.
//!
//! Moving a set of nodes one at a time can collide with a node that has not
//! moved yet. Moves are therefore issued in rounds: a node moves once its
//! target is free. A node whose target is held by a node that is not part of
//! the transform is merged away, keeping positions unique. Whatever remains
//! after no round makes progress is a permutation cycle among the moving
//! nodes, which leaves the node set unchanged and is skipped.

use super::SceneDocument;
use crate::commands::SceneCommand;
use scenekit_core::{Point, Point3};

impl SceneDocument {
    /// Translates the selection by `vector`.
    pub fn transform_translate(&mut self, vector: Point3, copy: bool) {
        self.transform_selected("Translation", copy, |p| p + vector);
    }

    /// Rotates the selection about `center` in the XY plane by `angle_deg`
    /// degrees (counter-clockwise). Z is unchanged.
    pub fn transform_rotate_xy(&mut self, center: Point, angle_deg: f64, copy: bool) {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        self.transform_selected("Rotation", copy, |p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            Point3::new(
                center.x + dx * cos - dy * sin,
                center.y + dx * sin + dy * cos,
                p.z,
            )
        });
    }

    /// Scales the selection about `center` by `factor`.
    pub fn transform_scale(&mut self, center: Point3, factor: f64, copy: bool) {
        self.transform_selected("Scale", copy, |p| center + (p - center) * factor);
    }

    fn transform_selected<F>(&mut self, label: &str, copy: bool, transform: F)
    where
        F: Fn(Point3) -> Point3,
    {
        let moves: Vec<(Point3, Point3)> = self
            .nodes
            .iter()
            .filter(|n| n.selected)
            .map(|n| (n.point(), transform(n.point())))
            .filter(|(from, to)| to.is_finite() && from != to)
            .collect();
        if moves.is_empty() {
            return;
        }

        self.begin_macro(label);
        if copy {
            for (_, to) in moves {
                if self.nodes.find_by_position(to).is_none() {
                    self.push(SceneCommand::add_node(to));
                }
            }
        } else {
            self.move_in_rounds(moves);
        }
        self.end_macro();
    }

    fn move_in_rounds(&mut self, mut pending: Vec<(Point3, Point3)>) {
        loop {
            let mut progressed = false;
            let mut i = 0;
            while i < pending.len() {
                let (from, to) = pending[i];
                let blocked_by_mover = pending.iter().any(|(src, _)| *src == to);

                match self.nodes.find_by_position(to) {
                    None => {
                        self.push(SceneCommand::edit_node_position(from, to));
                    }
                    Some(_) if blocked_by_mover => {
                        i += 1;
                        continue;
                    }
                    Some(_) => {
                        self.push(SceneCommand::remove_node(from));
                    }
                }
                pending.remove(i);
                progressed = true;
            }

            if pending.is_empty() || !progressed {
                break;
            }
        }

        if !pending.is_empty() {
            tracing::debug!("{} nodes left in place (permutation cycle)", pending.len());
        }
    }
}
