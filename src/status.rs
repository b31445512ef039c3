//! Active-set status vocabulary

/// Binding state of a variable or an inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status
{
    /// Variable strictly between its bounds.
    In,
    /// Variable at its lower bound.
    Dn,
    /// Variable at its upper bound.
    Up,
    /// Inequality inactive.
    Oe,
    /// Inequality active, treated as an equality.
    Eo,
}

impl Status
{
    /// Checks if a variable is pinned at one of its bounds.
    pub fn is_bound(&self) -> bool
    {
        matches!(self, Status::Dn | Status::Up)
    }

    /// Checks if the status belongs to an inequality.
    pub fn is_inequality(&self) -> bool
    {
        matches!(self, Status::Oe | Status::Eo)
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            Status::In => "IN",
            Status::Dn => "DN",
            Status::Up => "UP",
            Status::Oe => "OE",
            Status::Eo => "EO",
        })
    }
}

//

/// Transition of the status of a variable or an inequality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<F>
{
    /// Status before the transition.
    pub from: Status,
    /// Status after the transition.
    pub to: Status,
    /// Index of the variable or the inequality.
    pub id: usize,
    /// Parameter value at which the transition occurs.
    pub lambda: F,
}

impl<F> Event<F>
{
    /// Creates an instance.
    pub fn new(from: Status, to: Status, id: usize, lambda: F) -> Self
    {
        Event {
            from, to, id, lambda,
        }
    }
}

impl<F: core::fmt::LowerExp> core::fmt::Display for Event<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} -> {} at {:.3e}", self.id, self.from, self.to, self.lambda)
    }
}

//

#[test]
fn test_event_display()
{
    let e = Event::new(Status::In, Status::Up, 3, 0.5);

    assert!(e.to.is_bound());
    assert!(!e.from.is_inequality());
    assert_eq!(e.to_string(), "3 IN -> UP at 5.000e-1");
}
