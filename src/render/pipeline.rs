use crate::{
    config::model::Configuration,
    foundation::{core::Point, error::CardflowResult},
    render::surface::Surface,
    scene::projection::Scene,
    shape::Shape,
};

/// Per-frame paint counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Cards drawn.
    pub painted: usize,
    /// Cards not visible this frame.
    pub culled: usize,
    /// Cards whose paint was aborted by a geometry precondition failure.
    pub skipped: usize,
}

/// Indices of `cards` ordered back to front: largest camera-space distance first.
///
/// The sort is stable, so cards at equal distance keep their input order.
pub fn paint_order<S: Shape>(scene: &Scene, cards: &[S]) -> Vec<usize> {
    let mut order: Vec<(usize, f64)> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| (i, scene.to_camera(c.location()).z.abs()))
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order.into_iter().map(|(i, _)| i).collect()
}

/// Clear `surface` to the background colour and paint every card back to front.
///
/// A card that fails its geometry precondition is skipped and logged; the rest of the frame is
/// still drawn. Any other error aborts the frame.
#[tracing::instrument(skip_all, fields(cards = cards.len(), active = ?active))]
pub fn render_frame<S: Shape>(
    surface: &mut dyn Surface,
    scene: &Scene,
    cards: &mut [S],
    active: Option<usize>,
    config: &Configuration,
) -> CardflowResult<FrameStats> {
    config.validate()?;
    surface.clear(config.background_color);

    let mut stats = FrameStats::default();
    for idx in paint_order(scene, cards) {
        let card = &mut cards[idx];
        match card.paint(surface, scene, active == Some(idx), config) {
            Ok(()) if card.render_state().quad().is_some() => stats.painted += 1,
            Ok(()) => {
                tracing::debug!(card = idx, "card culled");
                stats.culled += 1;
            }
            Err(err) if err.is_precondition() => {
                tracing::warn!(card = idx, error = %err, "card skipped");
                stats.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }
    tracing::debug!(?stats, "frame rendered");
    Ok(stats)
}

/// Front-most card whose last painted quad contains `point`.
#[tracing::instrument(skip(scene, cards))]
pub fn pick_card<S: Shape>(scene: &Scene, cards: &[S], point: Point) -> Option<usize> {
    paint_order(scene, cards)
        .into_iter()
        .rev()
        .find(|&i| cards[i].contains(point))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
