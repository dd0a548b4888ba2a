//! Algorithm registry for discovery and lookup of algorithm units.
//!
//! Units are registered once at startup and looked up by id afterwards. The
//! registry is an explicitly constructed value; nothing here is global.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use rand::rngs::StdRng;
use serde_json::Value;

use crate::error::{ComputeFault, RegistryError};
use crate::utils::OpCounter;
use crate::value::{Input, InputShape, Output};

/// Class of algorithmic problem. Each category shares one validation rule
/// set and one correctness oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Sorting,
    Searching,
    SortedSearching,
    GraphTraversal,
    StringMatching,
    Combinatorics,
    Recurrence,
    DynamicProgramming,
    Statistics,
    Shuffling,
    Cryptography,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 11] = [
        Category::Sorting,
        Category::Searching,
        Category::SortedSearching,
        Category::GraphTraversal,
        Category::StringMatching,
        Category::Combinatorics,
        Category::Recurrence,
        Category::DynamicProgramming,
        Category::Statistics,
        Category::Shuffling,
        Category::Cryptography,
    ];

    /// Stable machine name (e.g. "graph-traversal")
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Sorting => "sorting",
            Self::Searching => "searching",
            Self::SortedSearching => "sorted-searching",
            Self::GraphTraversal => "graph-traversal",
            Self::StringMatching => "string-matching",
            Self::Combinatorics => "combinatorics",
            Self::Recurrence => "recurrence",
            Self::DynamicProgramming => "dynamic-programming",
            Self::Statistics => "statistics",
            Self::Shuffling => "shuffling",
            Self::Cryptography => "cryptography",
        }
    }

    /// Parse a slug back into a category.
    pub fn parse(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Input shape shared by the units of this category.
    pub const fn input_shape(self) -> InputShape {
        match self {
            Self::Sorting => InputShape::IntegerSequence,
            Self::Searching => InputShape::SearchQuery,
            Self::SortedSearching => InputShape::SortedSearchQuery,
            Self::GraphTraversal => InputShape::Graph,
            Self::StringMatching => InputShape::TextWithPattern,
            Self::Combinatorics | Self::Recurrence => InputShape::NonNegativeInteger,
            Self::DynamicProgramming => InputShape::Text,
            Self::Statistics => InputShape::NonEmptyIntegerSequence,
            Self::Shuffling => InputShape::Seed,
            Self::Cryptography => InputShape::RsaRequest,
        }
    }

    /// Description of the output every unit of this category produces.
    pub const fn output_shape(self) -> &'static str {
        match self {
            Self::Sorting => "ordered permutation of the input",
            Self::Searching | Self::SortedSearching => "index of a matching element, or absence",
            Self::GraphTraversal => "visit order of the nodes reachable from start",
            Self::StringMatching => "ascending offsets (in characters) of every match",
            Self::Combinatorics => "number of arrangements (n!)",
            Self::Recurrence => "n-th term of the recurrence",
            Self::DynamicProgramming => "palindromic substrings and their count",
            Self::Statistics => "smallest, largest, median, quartiles and mode",
            Self::Shuffling => "permutation of a 52-card deck",
            Self::Cryptography => "round-trip transcript, cipher values or decrypted text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Trait that every algorithm unit implements.
///
/// A unit is a pure computation over validated input: it receives an operation
/// counter bound to one run and returns either an output or a fault.
pub trait AlgorithmUnit: Send + Sync {
    /// Unique id (e.g., "bubble-sort")
    fn id(&self) -> &'static str;

    /// Display name
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    fn category(&self) -> Category;

    /// Declared input shape; defaults to the category's shape.
    fn input_shape(&self) -> InputShape {
        self.category().input_shape()
    }

    /// Declared output shape; defaults to the category's shape.
    fn output_shape(&self) -> &'static str {
        self.category().output_shape()
    }

    /// Generous estimate of the operations needed for `input`.
    /// The harness scales it into the step budget.
    fn worst_case_ops(&self, input: &Input) -> u64;

    /// Run the algorithm.
    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault>;

    /// Representative raw input, used when the caller supplies none.
    fn sample_input(&self) -> Value;

    /// Random raw input of roughly `size` elements for benchmark sweeps.
    /// `None` when the unit has no meaningful notion of size.
    fn generate_input(&self, _size: usize, _rng: &mut StdRng) -> Option<Value> {
        None
    }
}

/// Fault returned by a unit handed an input variant its shape never produces.
pub(crate) fn unexpected_input(id: &str, input: &Input) -> ComputeFault {
    ComputeFault::invariant(format!("'{}' received unexpected input {:?}", id, input))
}

/// Lazy, restartable sequence of ids in one category (clone it to restart).
#[derive(Clone, Debug)]
pub struct CategoryIds<'a> {
    inner: std::slice::Iter<'a, &'static str>,
}

impl Iterator for CategoryIds<'_> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for CategoryIds<'_> {}

/// Catalogue of all algorithm units
pub struct AlgorithmRegistry {
    units: Vec<Box<dyn AlgorithmUnit>>,
    index: HashMap<&'static str, usize>,
    by_category: BTreeMap<Category, Vec<&'static str>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            index: HashMap::new(),
            by_category: BTreeMap::new(),
        }
    }

    /// Register a unit; fails if its id is already taken.
    pub fn register<A: AlgorithmUnit + 'static>(&mut self, unit: A) -> Result<(), RegistryError> {
        self.register_boxed(Box::new(unit))
    }

    pub fn register_boxed(&mut self, unit: Box<dyn AlgorithmUnit>) -> Result<(), RegistryError> {
        let id = unit.id();
        if self.index.contains_key(id) {
            return Err(RegistryError::DuplicateId(id.to_string()));
        }
        tracing::debug!(id, category = %unit.category(), "registering algorithm");
        self.index.insert(id, self.units.len());
        self.by_category.entry(unit.category()).or_default().push(id);
        self.units.push(unit);
        Ok(())
    }

    /// Find a unit by id
    pub fn lookup(&self, id: &str) -> Result<&dyn AlgorithmUnit, RegistryError> {
        self.index
            .get(id)
            .map(|&idx| self.units[idx].as_ref())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Ids in `category`, in registration order. Empty if the category has no units.
    pub fn list_by_category(&self, category: Category) -> CategoryIds<'_> {
        let ids: &[&'static str] = self
            .by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        CategoryIds { inner: ids.iter() }
    }

    /// Categories that have at least one unit, in declaration order.
    pub fn list_categories(&self) -> Vec<Category> {
        self.by_category.keys().copied().collect()
    }

    /// Get all registered units in registration order
    pub fn all(&self) -> &[Box<dyn AlgorithmUnit>] {
        &self.units
    }

    /// List unit ids in registration order
    pub fn list_ids(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> Result<AlgorithmRegistry, RegistryError> {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::sorting::BubbleSort)?;
    registry.register(crate::sorting::SelectionSort)?;
    registry.register(crate::sorting::MergeSort)?;
    registry.register(crate::searching::LinearSearch)?;
    registry.register(crate::searching::BinarySearch)?;
    registry.register(crate::graph::BreadthFirstSearch)?;
    registry.register(crate::graph::DepthFirstSearch)?;
    registry.register(crate::string_matching::NaiveSearch)?;
    registry.register(crate::string_matching::KnuthMorrisPratt)?;
    registry.register(crate::numeric::Factorial)?;
    registry.register(crate::numeric::Fibonacci)?;
    registry.register(crate::dynamic_programming::PalindromicSubstrings)?;
    registry.register(crate::statistics::SummaryStatistics)?;
    registry.register(crate::shuffling::ShuffleDeck)?;
    registry.register(crate::cryptography::Rsa)?;

    Ok(registry)
}
