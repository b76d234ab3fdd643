use crate::geometry::KeyboardLayout;
use std::collections::VecDeque;

/// Hop counts from `origin` to every slot of the layout.
/// Slots that cannot be reached stay `None`.
pub fn distances_from(layout: &KeyboardLayout, origin: usize) -> Vec<Option<u32>> {
    let mut dist = vec![None; layout.key_count()];
    dist[origin] = Some(0);

    let mut queue = VecDeque::with_capacity(layout.key_count());
    queue.push_back(origin);

    while let Some(slot) = queue.pop_front() {
        let next = dist[slot].unwrap_or(0) + 1;
        for neighbor in layout.neighbors(slot) {
            if dist[neighbor].is_none() {
                dist[neighbor] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    dist
}
