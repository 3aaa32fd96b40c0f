//! # Screenings
//!
//! A screening schedules one show in one theater with an experience tag and
//! carries the seat-reservation state. Reserved seats are a set of canonical
//! seat IDs; validity is always judged against the *current* theater's
//! dimensions, so reassigning the theater (or resizing it) makes the whole
//! set meaningless — the aggregate clears it.

use std::collections::HashSet;
use std::fmt;

use uuid::Uuid;

use crate::core::show::ShowId;
use crate::core::theater::{Theater, TheaterId, seat_id};

/// Opaque identity of a screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreeningId(Uuid);

impl ScreeningId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Presentation format of a screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Standard2d,
    Standard3d,
    Imax,
}

impl Experience {
    pub const ALL: [Experience; 3] =
        [Experience::Standard2d, Experience::Standard3d, Experience::Imax];

    pub fn label(&self) -> &'static str {
        match self {
            Experience::Standard2d => "Standard 2D",
            Experience::Standard3d => "Standard 3D",
            Experience::Imax => "IMAX",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Seat operation failures. Both leave the reservation set untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatError {
    /// The seat is outside the theater's current grid.
    InvalidSeat(String),
    /// Reserving an already-reserved seat, or releasing one that is free.
    SeatConflict(String),
}

impl SeatError {
    /// The canonical seat ID the operation was addressed to.
    pub fn seat(&self) -> &str {
        match self {
            SeatError::InvalidSeat(seat) | SeatError::SeatConflict(seat) => seat,
        }
    }
}

impl fmt::Display for SeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatError::InvalidSeat(seat) => write!(f, "'{}' is not a valid seat", seat),
            SeatError::SeatConflict(seat) => {
                write!(f, "'{}' conflicts with the current reservations", seat)
            }
        }
    }
}

impl std::error::Error for SeatError {}

#[derive(Debug, Clone)]
pub struct Screening {
    id: ScreeningId,
    show: ShowId,
    theater: TheaterId,
    pub experience: Experience,
    reserved: HashSet<String>,
}

impl Screening {
    pub fn new(show: ShowId, theater: TheaterId, experience: Experience) -> Self {
        Self {
            id: ScreeningId::new(),
            show,
            theater,
            experience,
            reserved: HashSet::new(),
        }
    }

    pub fn id(&self) -> ScreeningId {
        self.id
    }

    pub fn show(&self) -> ShowId {
        self.show
    }

    pub fn theater(&self) -> TheaterId {
        self.theater
    }

    pub fn reserved_seat_ids(&self) -> &HashSet<String> {
        &self.reserved
    }

    pub fn is_reserved(&self, seat: &str) -> bool {
        self.reserved.contains(seat)
    }

    /// Reserve `(row, column)` against the given theater's grid. Fails with
    /// `InvalidSeat` when out of range and `SeatConflict` when already
    /// reserved; no side effects on failure.
    pub fn reserve(&mut self, theater: &Theater, row: u16, column: char) -> Result<(), SeatError> {
        let seat = seat_id(row, column);
        if !theater.is_valid_seat(row, column) {
            return Err(SeatError::InvalidSeat(seat));
        }
        if self.reserved.contains(&seat) {
            return Err(SeatError::SeatConflict(seat));
        }
        self.reserved.insert(seat);
        Ok(())
    }

    /// Release `(row, column)`. Same range rule as [`reserve`]; fails with
    /// `SeatConflict` when the seat is not currently reserved.
    ///
    /// [`reserve`]: Screening::reserve
    pub fn release(&mut self, theater: &Theater, row: u16, column: char) -> Result<(), SeatError> {
        let seat = seat_id(row, column);
        if !theater.is_valid_seat(row, column) {
            return Err(SeatError::InvalidSeat(seat));
        }
        if !self.reserved.remove(&seat) {
            return Err(SeatError::SeatConflict(seat));
        }
        Ok(())
    }

    /// Unconditionally empty the reservation set. Used when the theater's
    /// dimensions change, the screening's theater is reassigned, or the
    /// screening ends.
    pub fn clear_reservations(&mut self) {
        self.reserved.clear();
    }

    pub(crate) fn set_show(&mut self, show: ShowId) {
        self.show = show;
    }

    pub(crate) fn set_theater(&mut self, theater: TheaterId) {
        self.theater = theater;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn screening_in(theater: &Theater) -> Screening {
        Screening::new(ShowId::new(), theater.id(), Experience::Standard2d)
    }

    #[test]
    fn test_reserve_release_scenario_two_by_two() {
        let theater = Theater::new("T1", 2, 2);
        let mut screening = screening_in(&theater);

        assert_eq!(screening.reserve(&theater, 1, 'A'), Ok(()));
        assert_eq!(
            screening.reserve(&theater, 1, 'A'),
            Err(SeatError::SeatConflict("A1".to_string()))
        );
        assert_eq!(
            screening.release(&theater, 1, 'B'),
            Err(SeatError::SeatConflict("B1".to_string()))
        );
        assert_eq!(screening.release(&theater, 1, 'A'), Ok(()));
        assert!(screening.reserved_seat_ids().is_empty());
    }

    #[test]
    fn test_reserve_out_of_range_is_invalid_seat() {
        let theater = Theater::new("T1", 3, 3);
        let mut screening = screening_in(&theater);
        assert_eq!(
            screening.reserve(&theater, 4, 'A'),
            Err(SeatError::InvalidSeat("A4".to_string()))
        );
        assert_eq!(
            screening.reserve(&theater, 1, 'D'),
            Err(SeatError::InvalidSeat("D1".to_string()))
        );
        assert!(screening.reserved_seat_ids().is_empty());
    }

    #[test]
    fn test_lowercase_column_reserves_canonical_id() {
        let theater = Theater::new("T1", 12, 2);
        let mut screening = screening_in(&theater);
        screening.reserve(&theater, 10, 'a').unwrap();
        assert!(screening.is_reserved("A10"));
        // The canonical ID conflicts regardless of input case.
        assert_eq!(
            screening.reserve(&theater, 10, 'A'),
            Err(SeatError::SeatConflict("A10".to_string()))
        );
    }

    #[test]
    fn test_validity_follows_the_theater_passed_in() {
        let big = Theater::new("Big", 10, 10);
        let small = Theater::new("Small", 2, 2);
        let mut screening = screening_in(&big);
        screening.reserve(&big, 9, 'J').unwrap();
        // The same coordinates are invalid relative to the small grid.
        assert_eq!(
            screening.release(&small, 9, 'J'),
            Err(SeatError::InvalidSeat("J9".to_string()))
        );
    }

    #[test]
    fn test_clear_reservations() {
        let theater = Theater::new("T1", 2, 2);
        let mut screening = screening_in(&theater);
        screening.reserve(&theater, 1, 'A').unwrap();
        screening.reserve(&theater, 2, 'B').unwrap();
        screening.clear_reservations();
        assert!(screening.reserved_seat_ids().is_empty());
    }

    proptest! {
        /// reserve-then-release on the same coordinates restores the prior set.
        #[test]
        fn prop_reserve_release_round_trips(
            rows in 1u16..=20,
            columns in 1u16..=26,
            row in 1u16..=20,
            column_index in 0u16..26,
        ) {
            prop_assume!(row <= rows && column_index < columns);
            let theater = Theater::new("P", rows, columns);
            let mut screening = screening_in(&theater);
            let column = crate::core::theater::column_letter(column_index);

            let before = screening.reserved_seat_ids().clone();
            screening.reserve(&theater, row, column).unwrap();
            screening.release(&theater, row, column).unwrap();
            prop_assert_eq!(screening.reserved_seat_ids(), &before);
        }

        /// A second reserve on the same seat always conflicts and changes nothing.
        #[test]
        fn prop_double_reserve_conflicts(
            rows in 1u16..=20,
            columns in 1u16..=26,
            row in 1u16..=20,
            column_index in 0u16..26,
        ) {
            prop_assume!(row <= rows && column_index < columns);
            let theater = Theater::new("P", rows, columns);
            let mut screening = screening_in(&theater);
            let column = crate::core::theater::column_letter(column_index);

            screening.reserve(&theater, row, column).unwrap();
            let after_first = screening.reserved_seat_ids().clone();
            let second = screening.reserve(&theater, row, column);
            prop_assert!(matches!(second, Err(SeatError::SeatConflict(_))));
            prop_assert_eq!(screening.reserved_seat_ids(), &after_first);
        }

        /// Out-of-range coordinates fail with InvalidSeat for every grid ≥ 1×1.
        #[test]
        fn prop_out_of_range_is_invalid(
            rows in 1u16..=20,
            columns in 1u16..=26,
            row in 0u16..=40,
            column_index in 0u16..30,
        ) {
            prop_assume!(row == 0 || row > rows || column_index >= columns);
            prop_assume!(column_index < 26);
            let theater = Theater::new("P", rows, columns);
            let mut screening = screening_in(&theater);
            let column = crate::core::theater::column_letter(column_index);

            let result = screening.reserve(&theater, row, column);
            prop_assert!(matches!(result, Err(SeatError::InvalidSeat(_))));
            prop_assert!(screening.reserved_seat_ids().is_empty());
        }
    }
}
