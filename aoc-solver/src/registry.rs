//! Solver registry mapping day numbers to solver implementations

use crate::fingerprint::{ContentFingerprint, ExecutableTimestamp, FingerprintSource};
use crate::solver::Solver;
use tracing::{debug, warn};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;

/// Calculate flat index from day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS_PER_YEAR {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct day from flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

/// Extract the day number from a solver name of the form `DayNN`
///
/// Exactly two ASCII digits encoding 01-25 are accepted.
///
/// ```
/// use aoc_solver::day_from_name;
///
/// assert_eq!(day_from_name("Day07"), Some(7));
/// assert_eq!(day_from_name("Day7"), None);
/// assert_eq!(day_from_name("Day26"), None);
/// ```
pub fn day_from_name(name: &str) -> Option<u8> {
    let digits = name.strip_prefix("Day")?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u8 = digits.parse().ok()?;
    calc_index(day).map(|_| day)
}

// ============================================================================
// Plugin Collection
// ============================================================================

/// Constructor for a registered solver
pub type SolverConstructor = fn() -> Box<dyn Solver>;

/// Static registration record for one solver type
///
/// `#[derive(AutoRegisterSolver)]` submits one of these per type, using the
/// type's identifier as `name`. The name must follow the `DayNN` convention or
/// the plugin is ignored during discovery.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{SolveError, Solver, SolverPlugin};
///
/// struct Day01;
///
/// impl Solver for Day01 {
///     fn solve_level1(&self, input: &str) -> Result<String, SolveError> {
///         Ok(input.len().to_string())
///     }
///
///     fn solve_level2(&self, _input: &str) -> Result<String, SolveError> {
///         Ok("0".to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         name: "Day01",
///         constructor: || Box::new(Day01),
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// Declared name, e.g. `Day01`
    pub name: &'static str,
    /// Creates the solver instance held by the registry
    pub constructor: SolverConstructor,
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

// ============================================================================
// Builder
// ============================================================================

struct PendingSolver {
    name: String,
    solver: Box<dyn Solver>,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Solvers whose name does not encode a valid day are skipped. When two
/// solvers claim the same day the one registered last wins.
///
/// # Example
///
/// ```no_run
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new().register_all_plugins().build();
/// for day in registry.available_days() {
///     println!("Day {:02}", day);
/// }
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<PendingSolver>>,
    fingerprints: Option<Box<dyn FingerprintSource>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS_PER_YEAR).map(|_| None).collect(),
            fingerprints: None,
        }
    }

    /// Register a solver under a `DayNN` name
    pub fn register<S>(mut self, name: &str, solver: S) -> Self
    where
        S: Solver + 'static,
    {
        self.insert(name, Box::new(solver));
        self
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(mut self) -> Self {
        for plugin in inventory::iter::<SolverPlugin>() {
            self.insert(plugin.name, (plugin.constructor)());
        }
        self
    }

    /// Use a custom strategy for solver fingerprints
    ///
    /// Defaults to [`ExecutableTimestamp`].
    pub fn fingerprint_source<F>(mut self, source: F) -> Self
    where
        F: FingerprintSource + 'static,
    {
        self.fingerprints = Some(Box::new(source));
        self
    }

    fn insert(&mut self, name: &str, solver: Box<dyn Solver>) {
        let Some(index) = day_from_name(name).and_then(calc_index) else {
            debug!(name, "ignoring solver with malformed name");
            return;
        };

        if let Some(previous) = &self.entries[index] {
            warn!(
                day = from_index(index),
                previous = %previous.name,
                replacement = name,
                "duplicate solver registration, keeping the later one"
            );
        }

        self.entries[index] = Some(PendingSolver {
            name: name.to_string(),
            solver,
        });
    }

    /// Fingerprint every solver and freeze the registry
    pub fn build(self) -> SolverRegistry {
        let source = self
            .fingerprints
            .unwrap_or_else(|| Box::new(ExecutableTimestamp::new()));

        let entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                entry.map(|pending| {
                    let day = from_index(i);
                    SolverDescriptor {
                        day,
                        fingerprint: source.fingerprint(day, &pending.name),
                        name: pending.name,
                        solver: pending.solver,
                    }
                })
            })
            .collect();

        SolverRegistry { entries }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// A registered solver together with its identity
pub struct SolverDescriptor {
    day: u8,
    name: String,
    solver: Box<dyn Solver>,
    fingerprint: Option<ContentFingerprint>,
}

impl SolverDescriptor {
    /// The day this solver answers for
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The declared `DayNN` name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The solver itself
    pub fn solver(&self) -> &dyn Solver {
        self.solver.as_ref()
    }

    /// Fingerprint of the solver's code, if one could be computed
    pub fn fingerprint(&self) -> Option<&ContentFingerprint> {
        self.fingerprint.as_ref()
    }
}

/// Immutable day -> solver lookup with O(1) access
///
/// Read-only once built, so it can be shared by reference across threads.
pub struct SolverRegistry {
    entries: Vec<Option<SolverDescriptor>>,
}

impl SolverRegistry {
    /// Build a registry from every self-registered solver in the program
    pub fn discover() -> Self {
        RegistryBuilder::new().register_all_plugins().build()
    }

    /// Look up the solver for a day
    pub fn resolve(&self, day: u8) -> Option<&SolverDescriptor> {
        calc_index(day).and_then(|i| self.entries.get(i)?.as_ref())
    }

    /// Check if a solver exists for a day
    pub fn has(&self, day: u8) -> bool {
        self.resolve(day).is_some()
    }

    /// Registered days in ascending order
    pub fn available_days(&self) -> Vec<u8> {
        self.iter().map(SolverDescriptor::day).collect()
    }

    /// Fingerprint of a day's solver; `None` if unknown or not computable
    pub fn fingerprint_of(&self, day: u8) -> Option<&ContentFingerprint> {
        self.resolve(day)?.fingerprint()
    }

    /// Iterate over registered solvers in ascending day order
    pub fn iter(&self) -> impl Iterator<Item = &SolverDescriptor> + '_ {
        self.entries.iter().flatten()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}
