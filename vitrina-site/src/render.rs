//! Plain-text rendering of carousel snapshots.

use vitrina_core::CarouselSnapshot;
use vitrina_core::carousel::{ContentStatus, ItemFrame};

use crate::sections::Section;

const LOADING: &str = "Se încarcă...";
const EMPTY: &str = "Nimic de afișat";

/// One section as a block of lines, front item marked with `>`.
pub fn render(section: Section, snapshot: &CarouselSnapshot) -> String {
    let mut lines = vec![format!("== {} ==", section.title())];

    match &snapshot.status {
        ContentStatus::Loading => lines.push(format!("  {LOADING}")),
        ContentStatus::Failed(error) => {
            lines.push(format!("  {}: {error}", section.unavailable()));
        }
        ContentStatus::Ready if snapshot.is_empty() => lines.push(format!("  {EMPTY}")),
        ContentStatus::Ready => {
            let state = if snapshot.suspended { "paused" } else { "playing" };
            if let Some(indicator) = snapshot.indicator() {
                lines.push(format!("  {indicator} ({state})"));
            }
            let mut frames: Vec<&ItemFrame> = snapshot
                .frames
                .iter()
                .filter(|frame| frame.transform.visible)
                .collect();
            frames.sort_by_key(|frame| frame.position);
            lines.extend(frames.into_iter().map(render_frame));
        }
    }

    lines.join("\n")
}

fn render_frame(frame: &ItemFrame) -> String {
    let marker = if frame.is_active { '>' } else { ' ' };
    let t = &frame.transform;
    format!(
        "  {marker} [{:+}] {:<40} x={:.0} z={:.0} rot={:.0} scale={:.2} opacity={:.2} layer={}",
        frame.position.get(),
        frame.label,
        t.offset_x,
        t.offset_z,
        t.rotate_y_deg,
        t.scale,
        t.opacity,
        t.z_index,
    )
}
