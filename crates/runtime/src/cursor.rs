use foundation::{Year, YearDomain};

/// Years advanced per animation step.
pub const YEAR_STEP: i32 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorState {
    Idle,
    Running,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorInputError {
    OutOfDomain { year: Year },
    Animating,
}

impl std::fmt::Display for CursorInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorInputError::OutOfDomain { year } => {
                write!(f, "year {} is outside the cursor domain", year.0)
            }
            CursorInputError::Animating => {
                write!(f, "manual cursor edits are ignored while animating")
            }
        }
    }
}

impl std::error::Error for CursorInputError {}

/// The year cursor driving visibility filtering.
///
/// `Running` is true only while a stepping loop is actively progressing.
/// Manual edits are accepted only while idle, so the loop and user input
/// never write the cursor at the same time. All transitions keep the year
/// inside the domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeCursor {
    year: Year,
    state: CursorState,
    domain: YearDomain,
}

impl TimeCursor {
    pub fn new(domain: YearDomain) -> Self {
        Self {
            year: domain.min,
            state: CursorState::Idle,
            domain,
        }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn domain(&self) -> YearDomain {
        self.domain
    }

    pub fn is_running(&self) -> bool {
        self.state == CursorState::Running
    }

    /// Manual cursor edit. Rejected while running and for out-of-domain
    /// years; the cursor is unchanged on rejection.
    pub fn set_year(&mut self, year: Year) -> Result<(), CursorInputError> {
        if self.is_running() {
            return Err(CursorInputError::Animating);
        }
        if !self.domain.contains(year) {
            return Err(CursorInputError::OutOfDomain { year });
        }
        self.year = year;
        Ok(())
    }

    /// `Idle` to `Running`. Returns `false` (and changes nothing) if a loop
    /// is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = CursorState::Running;
        true
    }

    /// One animation step, clamped to the end of the domain.
    pub fn advance(&mut self) {
        self.year = self.domain.clamp(Year(self.year.0 + YEAR_STEP));
    }

    /// Back to `Idle`, from any state.
    pub fn finish(&mut self) {
        self.state = CursorState::Idle;
    }

    pub fn at_end(&self) -> bool {
        self.year >= self.domain.max
    }
}

impl Default for TimeCursor {
    fn default() -> Self {
        Self::new(YearDomain::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CursorInputError, CursorState, TimeCursor};
    use foundation::Year;

    #[test]
    fn starts_idle_at_the_domain_minimum() {
        let c = TimeCursor::default();
        assert_eq!(c.year(), Year(1850));
        assert_eq!(c.state(), CursorState::Idle);
    }

    #[test]
    fn set_year_accepts_in_domain_values_while_idle() {
        let mut c = TimeCursor::default();
        assert!(c.set_year(Year(1999)).is_ok());
        assert_eq!(c.year(), Year(1999));
    }

    #[test]
    fn set_year_rejects_out_of_domain_values() {
        let mut c = TimeCursor::default();
        let err = c.set_year(Year(1700)).unwrap_err();
        assert_eq!(err, CursorInputError::OutOfDomain { year: Year(1700) });
        assert_eq!(c.year(), Year(1850));
        assert!(c.set_year(Year(2026)).is_err());
    }

    #[test]
    fn set_year_is_rejected_while_running() {
        let mut c = TimeCursor::default();
        assert!(c.begin());
        let err = c.set_year(Year(1900)).unwrap_err();
        assert_eq!(err, CursorInputError::Animating);
        assert_eq!(c.year(), Year(1850));
    }

    #[test]
    fn begin_is_idempotent() {
        let mut c = TimeCursor::default();
        assert!(c.begin());
        assert!(!c.begin());
        assert_eq!(c.state(), CursorState::Running);
    }

    #[test]
    fn advance_steps_by_five_and_clamps() {
        let mut c = TimeCursor::default();
        c.advance();
        assert_eq!(c.year(), Year(1855));

        c.set_year(Year(2023)).unwrap();
        c.advance();
        assert_eq!(c.year(), Year(2025));
        assert!(c.at_end());
    }

    #[test]
    fn stepping_from_the_start_visits_every_fifth_year() {
        let mut c = TimeCursor::default();
        let mut seen = vec![c.year().0];
        while !c.at_end() {
            c.advance();
            seen.push(c.year().0);
        }
        let expected: Vec<i32> = (1850..=2025).step_by(5).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn finish_returns_to_idle() {
        let mut c = TimeCursor::default();
        c.begin();
        c.finish();
        assert_eq!(c.state(), CursorState::Idle);
        assert!(c.set_year(Year(1875)).is_ok());
    }
}
