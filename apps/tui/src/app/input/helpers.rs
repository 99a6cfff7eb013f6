pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves a list cursor without wrapping.
pub const fn step_down(index: usize, len: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_handles_empty_and_edges() {
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
    }

    #[test]
    fn step_down_stops_at_last_row() {
        assert_eq!(step_down(0, 3), 1);
        assert_eq!(step_down(2, 3), 2);
        assert_eq!(step_down(0, 0), 0);
    }
}
