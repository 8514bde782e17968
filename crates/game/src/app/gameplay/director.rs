/// Wave level as a monotonic step curve over cumulative kills.
fn wave_for_kills(kills: u32) -> u32 {
    (kills / WAVE_KILLS_PER_STEP).min(WAVE_MAX)
}

fn corner_in_box(corner_x: i32, corner_y: i32, box_x: i32, box_y: i32) -> bool {
    corner_x >= box_x
        && corner_x < box_x + BODY_SIZE_PX
        && corner_y >= box_y
        && corner_y < box_y + BODY_SIZE_PX
}

/// Four-corner containment of box `a` against box `b`, both 16x16.
fn boxes_touch(a_x: i32, a_y: i32, b_x: i32, b_y: i32) -> bool {
    let corners = [
        (a_x, a_y),
        (a_x + BODY_SIZE_PX, a_y),
        (a_x, a_y + BODY_SIZE_PX),
        (a_x + BODY_SIZE_PX, a_y + BODY_SIZE_PX),
    ];
    corners
        .iter()
        .any(|&(corner_x, corner_y)| corner_in_box(corner_x, corner_y, b_x, b_y))
}
