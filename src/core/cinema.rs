//! # Cinema aggregate
//!
//! Owns the three collections (shows, theaters, screenings) and every
//! operation that touches more than one of them. Referential integrity is
//! maintained proactively here, not repaired after the fact:
//!
//! - deleting a show or theater cascade-removes its screenings;
//! - every screening-removal path detaches the screening from any theater
//!   that has it active, so no `current_screening` pointer ever dangles;
//! - resizing a theater and reassigning a screening's theater both clear the
//!   affected reservation sets, because seat IDs are theater-relative.

use log::{debug, info};

use crate::core::screening::{Experience, ScreeningId, Screening, SeatError};
use crate::core::show::{Show, ShowId};
use crate::core::theater::{OccupancyError, Theater, TheaterId, seat_id};

#[derive(Debug, Default)]
pub struct Cinema {
    shows: Vec<Show>,
    theaters: Vec<Theater>,
    screenings: Vec<Screening>,
}

impl Cinema {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn theaters(&self) -> &[Theater] {
        &self.theaters
    }

    pub fn screenings(&self) -> &[Screening] {
        &self.screenings
    }

    pub fn show(&self, id: ShowId) -> Option<&Show> {
        self.shows.iter().find(|s| s.id() == id)
    }

    pub fn show_mut(&mut self, id: ShowId) -> Option<&mut Show> {
        self.shows.iter_mut().find(|s| s.id() == id)
    }

    pub fn theater(&self, id: TheaterId) -> Option<&Theater> {
        self.theaters.iter().find(|t| t.id() == id)
    }

    pub fn theater_mut(&mut self, id: TheaterId) -> Option<&mut Theater> {
        self.theaters.iter_mut().find(|t| t.id() == id)
    }

    pub fn screening(&self, id: ScreeningId) -> Option<&Screening> {
        self.screenings.iter().find(|s| s.id() == id)
    }

    pub fn screening_mut(&mut self, id: ScreeningId) -> Option<&mut Screening> {
        self.screenings.iter_mut().find(|s| s.id() == id)
    }

    /// Screenings scheduled in the given theater, in collection order.
    pub fn screenings_in(&self, theater: TheaterId) -> Vec<&Screening> {
        self.screenings.iter().filter(|s| s.theater() == theater).collect()
    }

    // ------------------------------------------------------------------
    // Adds (no uniqueness constraints on names or titles)
    // ------------------------------------------------------------------

    pub fn add_show(&mut self, show: Show) -> ShowId {
        let id = show.id();
        info!("added show '{}'", show);
        self.shows.push(show);
        id
    }

    pub fn add_theater(&mut self, theater: Theater) -> TheaterId {
        let id = theater.id();
        info!(
            "added theater '{}' ({}x{})",
            theater.name,
            theater.rows(),
            theater.columns()
        );
        self.theaters.push(theater);
        id
    }

    pub fn add_screening(&mut self, screening: Screening) -> ScreeningId {
        let id = screening.id();
        self.screenings.push(screening);
        id
    }

    // ------------------------------------------------------------------
    // Deletes and cascades
    // ------------------------------------------------------------------

    /// Remove a show and every screening referencing it. Returns false when
    /// the show is unknown.
    pub fn delete_show(&mut self, id: ShowId) -> bool {
        let Some(position) = self.shows.iter().position(|s| s.id() == id) else {
            return false;
        };
        let doomed: Vec<ScreeningId> = self
            .screenings
            .iter()
            .filter(|s| s.show() == id)
            .map(|s| s.id())
            .collect();
        for screening in &doomed {
            self.detach_if_active(*screening);
        }
        self.screenings.retain(|s| s.show() != id);
        let show = self.shows.remove(position);
        info!("deleted show '{}', cascading {} screening(s)", show, doomed.len());
        true
    }

    /// Remove a theater and every screening referencing it.
    pub fn delete_theater(&mut self, id: TheaterId) -> bool {
        let Some(position) = self.theaters.iter().position(|t| t.id() == id) else {
            return false;
        };
        let doomed: Vec<ScreeningId> = self
            .screenings
            .iter()
            .filter(|s| s.theater() == id)
            .map(|s| s.id())
            .collect();
        for screening in &doomed {
            self.detach_if_active(*screening);
        }
        self.screenings.retain(|s| s.theater() != id);
        let theater = self.theaters.remove(position);
        info!(
            "deleted theater '{}', cascading {} screening(s)",
            theater.name,
            doomed.len()
        );
        true
    }

    /// Remove a single screening, detaching it from its theater first when
    /// it happens to be the active one.
    pub fn delete_screening(&mut self, id: ScreeningId) -> bool {
        let Some(position) = self.screenings.iter().position(|s| s.id() == id) else {
            return false;
        };
        self.detach_if_active(id);
        self.screenings.remove(position);
        true
    }

    /// Force any theater holding `screening` as its active screening back to
    /// idle. Part of every removal path so the back-reference never dangles.
    fn detach_if_active(&mut self, screening: ScreeningId) {
        for theater in &mut self.theaters {
            if theater.current_screening() == Some(screening) {
                debug!("detaching active screening from theater '{}'", theater.name);
                theater.clear_active();
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutations with invariant-preserving side effects
    // ------------------------------------------------------------------

    /// Update a theater's dimensions and clear the reservations of every
    /// screening scheduled in it — the old grid's seat IDs no longer mean
    /// anything. Returns false when the theater is unknown.
    pub fn resize_theater(&mut self, id: TheaterId, rows: u16, columns: u16) -> bool {
        let Some(theater) = self.theaters.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        theater.set_dimensions(rows, columns);
        info!("resized theater '{}' to {}x{}", theater.name, rows, columns);
        for screening in &mut self.screenings {
            if screening.theater() == id {
                screening.clear_reservations();
            }
        }
        true
    }

    /// Point a screening at a different show. Reservations are unaffected —
    /// seat IDs are theater-relative, not show-relative.
    pub fn reassign_screening_show(&mut self, id: ScreeningId, show: ShowId) -> bool {
        if self.show(show).is_none() {
            return false;
        }
        let Some(screening) = self.screenings.iter_mut().find(|s| s.id() == id) else {
            return false;
        };
        screening.set_show(show);
        true
    }

    /// Move a screening to a different theater. Clears its reservations (the
    /// old grid's seat IDs are meaningless in the new one) and detaches it
    /// from the old theater if it was active there. Reassigning to the same
    /// theater is a no-op.
    pub fn reassign_screening_theater(&mut self, id: ScreeningId, theater: TheaterId) -> bool {
        if self.theater(theater).is_none() {
            return false;
        }
        let Some(position) = self.screenings.iter().position(|s| s.id() == id) else {
            return false;
        };
        if self.screenings[position].theater() == theater {
            return true;
        }
        self.detach_if_active(id);
        let screening = &mut self.screenings[position];
        screening.set_theater(theater);
        screening.clear_reservations();
        true
    }

    pub fn set_experience(&mut self, id: ScreeningId, experience: Experience) -> bool {
        let Some(screening) = self.screenings.iter_mut().find(|s| s.id() == id) else {
            return false;
        };
        screening.experience = experience;
        true
    }

    // ------------------------------------------------------------------
    // Occupancy transitions
    // ------------------------------------------------------------------

    /// Start screening in a theater. The screening must exist and be
    /// scheduled in that theater; the theater must be idle.
    pub fn start_screening(
        &mut self,
        theater: TheaterId,
        screening: ScreeningId,
    ) -> Result<(), OccupancyError> {
        match self.screening(screening) {
            Some(s) if s.theater() == theater => {}
            _ => return Err(OccupancyError::NotScheduledHere),
        }
        let target = self
            .theater_mut(theater)
            .ok_or(OccupancyError::NotScheduledHere)?;
        target.start_screening(screening)?;
        info!("started screening in theater '{}'", target.name);
        Ok(())
    }

    /// End the active screening in a theater, clearing its reservations.
    /// Returns the screening that was active.
    pub fn end_screening(&mut self, theater: TheaterId) -> Result<ScreeningId, OccupancyError> {
        let target = self.theater_mut(theater).ok_or(OccupancyError::Idle)?;
        let ended = target.end_screening()?;
        info!("ended screening in theater '{}'", target.name);
        if let Some(screening) = self.screening_mut(ended) {
            screening.clear_reservations();
        }
        Ok(ended)
    }

    // ------------------------------------------------------------------
    // Seat reservations (resolve the screening's theater, then delegate)
    // ------------------------------------------------------------------

    pub fn reserve_seat(
        &mut self,
        id: ScreeningId,
        row: u16,
        column: char,
    ) -> Result<(), SeatError> {
        let Some(position) = self.screenings.iter().position(|s| s.id() == id) else {
            return Err(SeatError::InvalidSeat(seat_id(row, column)));
        };
        let theater_id = self.screenings[position].theater();
        let Some(theater) = self.theaters.iter().find(|t| t.id() == theater_id) else {
            return Err(SeatError::InvalidSeat(seat_id(row, column)));
        };
        self.screenings[position].reserve(theater, row, column)
    }

    pub fn release_seat(
        &mut self,
        id: ScreeningId,
        row: u16,
        column: char,
    ) -> Result<(), SeatError> {
        let Some(position) = self.screenings.iter().position(|s| s.id() == id) else {
            return Err(SeatError::InvalidSeat(seat_id(row, column)));
        };
        let theater_id = self.screenings[position].theater();
        let Some(theater) = self.theaters.iter().find(|t| t.id() == theater_id) else {
            return Err(SeatError::InvalidSeat(seat_id(row, column)));
        };
        self.screenings[position].release(theater, row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::show::ShowKind;
    use std::time::Duration;

    fn movie(title: &str) -> Show {
        Show::new(
            title,
            "",
            2008,
            Duration::from_secs(90 * 60),
            ShowKind::Movie {
                lead_actor: "Lead".to_string(),
            },
        )
    }

    /// Cinema with one show, one 2x2 theater, and one screening of that show.
    fn small_cinema() -> (Cinema, ShowId, TheaterId, ScreeningId) {
        let mut cinema = Cinema::new();
        let show = cinema.add_show(movie("X"));
        let theater = cinema.add_theater(Theater::new("T1", 2, 2));
        let screening = cinema.add_screening(Screening::new(show, theater, Experience::Imax));
        (cinema, show, theater, screening)
    }

    #[test]
    fn test_delete_show_cascades_its_screenings_only() {
        let (mut cinema, show_x, theater, _screening) = small_cinema();
        let show_y = cinema.add_show(movie("Y"));
        let kept = cinema.add_screening(Screening::new(show_y, theater, Experience::Standard2d));

        assert!(cinema.delete_show(show_x));
        assert_eq!(cinema.screenings().len(), 1);
        assert_eq!(cinema.screenings()[0].id(), kept);
        assert!(cinema.show(show_x).is_none());
    }

    #[test]
    fn test_delete_show_count_matches_cascade() {
        let (mut cinema, show, theater, _screening) = small_cinema();
        cinema.add_screening(Screening::new(show, theater, Experience::Standard3d));
        assert_eq!(cinema.screenings().len(), 2);
        cinema.delete_show(show);
        assert!(cinema.screenings().is_empty());
    }

    #[test]
    fn test_delete_show_detaches_active_screening() {
        let (mut cinema, show, theater, screening) = small_cinema();
        cinema.start_screening(theater, screening).unwrap();

        assert!(cinema.delete_show(show));
        assert_eq!(cinema.theater(theater).unwrap().current_screening(), None);
    }

    #[test]
    fn test_delete_theater_cascades_and_detaches() {
        let (mut cinema, show, theater, screening) = small_cinema();
        let other = cinema.add_theater(Theater::new("T2", 3, 3));
        let kept = cinema.add_screening(Screening::new(show, other, Experience::Standard2d));
        cinema.start_screening(theater, screening).unwrap();

        assert!(cinema.delete_theater(theater));
        assert_eq!(cinema.screenings().len(), 1);
        assert_eq!(cinema.screenings()[0].id(), kept);
        assert!(cinema.theater(theater).is_none());
    }

    #[test]
    fn test_delete_screening_detaches_theater() {
        let (mut cinema, _show, theater, screening) = small_cinema();
        cinema.start_screening(theater, screening).unwrap();

        assert!(cinema.delete_screening(screening));
        assert_eq!(cinema.theater(theater).unwrap().current_screening(), None);
        assert!(cinema.screening(screening).is_none());
    }

    #[test]
    fn test_resize_clears_reservations_in_that_theater_only() {
        let (mut cinema, show, theater, screening) = small_cinema();
        let other = cinema.add_theater(Theater::new("T2", 5, 5));
        let untouched = cinema.add_screening(Screening::new(show, other, Experience::Imax));

        cinema.reserve_seat(screening, 1, 'A').unwrap();
        cinema.reserve_seat(untouched, 2, 'B').unwrap();

        // Growing the grid still clears — old IDs are not trusted.
        assert!(cinema.resize_theater(theater, 10, 10));
        assert!(cinema.screening(screening).unwrap().reserved_seat_ids().is_empty());
        assert_eq!(cinema.screening(untouched).unwrap().reserved_seat_ids().len(), 1);
    }

    #[test]
    fn test_start_screening_rejects_wrong_theater() {
        let (mut cinema, _show, _theater, screening) = small_cinema();
        let other = cinema.add_theater(Theater::new("T2", 2, 2));
        assert_eq!(
            cinema.start_screening(other, screening),
            Err(OccupancyError::NotScheduledHere)
        );
        assert_eq!(cinema.theater(other).unwrap().current_screening(), None);
    }

    #[test]
    fn test_occupancy_scenario() {
        let (mut cinema, show, theater, screening) = small_cinema();
        let second = cinema.add_screening(Screening::new(show, theater, Experience::Standard3d));

        cinema.start_screening(theater, screening).unwrap();
        assert_eq!(
            cinema.theater(theater).unwrap().current_screening(),
            Some(screening)
        );

        assert_eq!(
            cinema.start_screening(theater, second),
            Err(OccupancyError::AlreadyActive)
        );
        assert_eq!(
            cinema.theater(theater).unwrap().current_screening(),
            Some(screening)
        );

        cinema.reserve_seat(screening, 1, 'A').unwrap();
        assert_eq!(cinema.end_screening(theater), Ok(screening));
        assert_eq!(cinema.theater(theater).unwrap().current_screening(), None);
        assert!(cinema.screening(screening).unwrap().reserved_seat_ids().is_empty());

        assert_eq!(cinema.end_screening(theater), Err(OccupancyError::Idle));
    }

    #[test]
    fn test_reassign_theater_clears_and_detaches() {
        let (mut cinema, _show, theater, screening) = small_cinema();
        let other = cinema.add_theater(Theater::new("T2", 8, 8));
        cinema.reserve_seat(screening, 2, 'B').unwrap();
        cinema.start_screening(theater, screening).unwrap();

        assert!(cinema.reassign_screening_theater(screening, other));
        let moved = cinema.screening(screening).unwrap();
        assert_eq!(moved.theater(), other);
        assert!(moved.reserved_seat_ids().is_empty());
        assert_eq!(cinema.theater(theater).unwrap().current_screening(), None);
    }

    #[test]
    fn test_reassign_same_theater_keeps_reservations() {
        let (mut cinema, _show, theater, screening) = small_cinema();
        cinema.reserve_seat(screening, 1, 'B').unwrap();
        assert!(cinema.reassign_screening_theater(screening, theater));
        assert!(cinema.screening(screening).unwrap().is_reserved("B1"));
    }

    #[test]
    fn test_reassign_show_keeps_reservations() {
        let (mut cinema, _show, _theater, screening) = small_cinema();
        let other = cinema.add_show(movie("Y"));
        cinema.reserve_seat(screening, 1, 'A').unwrap();
        assert!(cinema.reassign_screening_show(screening, other));
        let screening = cinema.screening(screening).unwrap();
        assert_eq!(screening.show(), other);
        assert!(screening.is_reserved("A1"));
    }

    #[test]
    fn test_screenings_in_filters_by_theater() {
        let (mut cinema, show, theater, screening) = small_cinema();
        let other = cinema.add_theater(Theater::new("T2", 2, 2));
        cinema.add_screening(Screening::new(show, other, Experience::Standard2d));

        let here = cinema.screenings_in(theater);
        assert_eq!(here.len(), 1);
        assert_eq!(here[0].id(), screening);
    }
}
