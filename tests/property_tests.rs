//! Law-shaped properties of the rotation group, checked with proptest.

use proptest::prelude::*;

use rust_twisty::core::{Axis, CubeRng, Direction, Move, Side};
use rust_twisty::cube::Cube;

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Clockwise), Just(Direction::AntiClockwise)]
}

/// A raw move; the layer is reduced modulo the cube size before use.
fn raw_move_strategy() -> impl Strategy<Value = (Axis, Direction, usize)> {
    (axis_strategy(), direction_strategy(), 0usize..8)
}

fn scrambled(size: usize, seed: u64) -> Cube<u16> {
    let mut counter = 0u16;
    let mut cube = Cube::with_tilefn(size, |_, _| {
        counter += 1;
        counter
    })
    .unwrap();
    cube.scramble(10, &mut CubeRng::new(seed)).unwrap();
    cube
}

fn identity_census(cube: &Cube<u16>) -> Vec<(usize, usize, usize, u16)> {
    let mut census: Vec<(usize, usize, usize, u16)> = cube
        .faces()
        .values()
        .flat_map(|face| {
            face.tiles()
                .map(|t| (t.color().index(), t.home().x, t.home().y, *t.payload()))
        })
        .collect();
    census.sort_unstable();
    census
}

proptest! {
    /// Clockwise then anticlockwise at the same layer restores the grid
    /// exactly, including every tile's rotation field.
    #[test]
    fn round_trip_law(
        size in 1usize..=4,
        seed in any::<u64>(),
        axis in axis_strategy(),
        direction in direction_strategy(),
        raw_layer in 0usize..8,
    ) {
        let mut cube = scrambled(size, seed);
        let layer = raw_layer % size;
        let before = cube.faces().clone();

        let mv = Move::new(axis, direction, layer);
        cube.rotate(mv, false).unwrap();
        cube.rotate(mv.inverse(), false).unwrap();

        prop_assert_eq!(cube.faces(), &before);
    }

    /// Any single operation applied four times is the identity.
    #[test]
    fn order_four_law(
        size in 1usize..=4,
        seed in any::<u64>(),
        axis in axis_strategy(),
        direction in direction_strategy(),
        raw_layer in 0usize..8,
    ) {
        let mut cube = scrambled(size, seed);
        let layer = raw_layer % size;
        let before = cube.faces().clone();

        let mv = Move::new(axis, direction, layer);
        for _ in 0..4 {
            cube.rotate(mv, false).unwrap();
        }

        prop_assert_eq!(cube.faces(), &before);
    }

    /// Moves relocate tiles, never create, destroy, or recolor them.
    #[test]
    fn census_invariance(
        size in 1usize..=4,
        moves in prop::collection::vec(raw_move_strategy(), 0..24),
    ) {
        let mut counter = 0u16;
        let mut cube = Cube::with_tilefn(size, |_, _| {
            counter += 1;
            counter
        })
        .unwrap();
        let expected = identity_census(&cube);

        for (axis, direction, raw_layer) in moves {
            cube.rotate(Move::new(axis, direction, raw_layer % size), false).unwrap();
        }

        prop_assert_eq!(cube.tile_count(), 6 * size * size);
        let counts = cube.color_counts();
        for side in Side::ALL {
            prop_assert_eq!(counts[&side], size * size);
        }
        prop_assert_eq!(identity_census(&cube), expected);
    }

    /// Tile rotations stay multiples of 90 in [0, 360).
    #[test]
    fn rotations_stay_normalized(
        size in 1usize..=4,
        moves in prop::collection::vec(raw_move_strategy(), 0..24),
    ) {
        let mut cube = Cube::new(size).unwrap();
        for (axis, direction, raw_layer) in moves {
            cube.rotate(Move::new(axis, direction, raw_layer % size), false).unwrap();
        }

        for face in cube.faces().values() {
            for tile in face.tiles() {
                prop_assert!(tile.rotation() >= 0);
                prop_assert!(tile.rotation() < 360);
                prop_assert_eq!(tile.rotation() % 90, 0);
            }
        }
    }

    /// An animated move changes nothing until its commit is applied, and
    /// then lands exactly on the synchronous post-state.
    #[test]
    fn deferred_commit_equals_synchronous_move(
        size in 1usize..=4,
        axis in axis_strategy(),
        direction in direction_strategy(),
        raw_layer in 0usize..8,
    ) {
        let layer = raw_layer % size;
        let mv = Move::new(axis, direction, layer);

        let mut deferred = Cube::new(size).unwrap();
        let mut synchronous = Cube::new(size).unwrap();
        let before = deferred.faces().clone();

        let event = deferred.rotate(mv, true).unwrap().expect("deferred event");
        prop_assert_eq!(deferred.faces(), &before);

        synchronous.rotate(mv, false).unwrap();
        deferred.apply(event.commit).unwrap();
        prop_assert_eq!(deferred.faces(), synchronous.faces());
    }
}
