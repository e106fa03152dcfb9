pub mod attack;
pub mod creature;
pub mod effects;
pub mod engine;
pub mod items;
pub mod party;
pub mod rng;
pub mod type_chart;

#[cfg(test)]
mod tests;

/// Picks an attack or a creature either by position or by name.
///
/// Name matching ignores ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Index(usize),
    Name(&'a str),
}

/// `floor(value * percent / 100)`, widened so large stats cannot overflow.
pub(crate) fn percent_of(value: u32, percent: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

impl From<usize> for Selector<'_> {
    fn from(index: usize) -> Self {
        Selector::Index(index)
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(name: &'a str) -> Self {
        Selector::Name(name)
    }
}

impl<'a> From<&'a String> for Selector<'a> {
    fn from(name: &'a String) -> Self {
        Selector::Name(name.as_str())
    }
}
