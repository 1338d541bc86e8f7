//! Formal verification of grid geometry using the Kani model checker.
//!
//! These proof harnesses verify the edge and cell properties the invariants
//! rely on for all coordinates within a small bound.

#[cfg(kani)]
mod proofs {
    use crate::{Cell, Dot, Edge, Grid};

    /// Verify that edge construction ignores endpoint order.
    #[kani::proof]
    fn verify_edge_unordered() {
        let a = Dot::new(kani::any::<u8>() as usize, kani::any::<u8>() as usize);
        let b = Dot::new(kani::any::<u8>() as usize, kani::any::<u8>() as usize);

        assert_eq!(Edge::new(a, b), Edge::new(b, a));
    }

    /// Verify that every side of an on-grid cell borders that cell.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_sides_border_cell() {
        let size: usize = kani::any();
        kani::assume(size >= 1 && size <= 4);
        let cell = Cell::new(kani::any(), kani::any());
        let grid = Grid::new(size);
        kani::assume(grid.contains_cell(cell));

        for edge in cell.edges() {
            let cells = grid.cells_adjacent_to_edge(edge);
            assert!(matches!(cells, Ok(ref c) if c.contains(&cell)));
        }
    }
}
