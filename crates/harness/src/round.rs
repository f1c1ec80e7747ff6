use std::fmt;

use chain::ProvenanceStore;
use types::{AddressKind, HandlerName};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Less,
    Greater,
}

impl Relation {
    pub const fn symbol(self) -> &'static str {
        match self {
            Relation::Less => "<",
            Relation::Greater => ">",
        }
    }
}

/// One strict inequality between two handlers' addresses of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub kind: AddressKind,
    pub lhs: HandlerName,
    pub relation: Relation,
    pub rhs: HandlerName,
}

impl Comparison {
    pub const fn new(
        kind: AddressKind,
        lhs: HandlerName,
        relation: Relation,
        rhs: HandlerName,
    ) -> Self {
        Self {
            kind,
            lhs,
            relation,
            rhs,
        }
    }

    pub fn holds(&self, store: &ProvenanceStore) -> bool {
        let lhs = store.address(self.lhs, self.kind);
        let rhs = store.address(self.rhs, self.kind);
        match self.relation {
            Relation::Less => lhs < rhs,
            Relation::Greater => lhs > rhs,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind.label();
        write!(
            f,
            "{}_{} {} {}_{}",
            label,
            self.lhs,
            self.relation.symbol(),
            label,
            self.rhs
        )
    }
}

/// A harness round: a conjunction of comparisons that must all hold once
/// the round's chain has run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub ordinal: usize,
    pub clauses: Vec<Comparison>,
}

impl Round {
    pub fn new(ordinal: usize, clauses: Vec<Comparison>) -> Self {
        Self { ordinal, clauses }
    }

    /// Clauses joined with `&&`, as shown to the operator.
    pub fn description(&self) -> String {
        self.clauses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" && ")
    }

    /// Returns the first clause that does not hold.
    pub fn check(&self, store: &ProvenanceStore) -> Result<(), Comparison> {
        match self.clauses.iter().find(|clause| !clause.holds(store)) {
            Some(failed) => Err(*failed),
            None => Ok(()),
        }
    }
}

/// The six level42 rounds: three over stack addresses, then the same three
/// shapes over heap addresses.
pub fn standard_rounds() -> Vec<Round> {
    use HandlerName::{Bar, Boo, Foo};
    use Relation::{Greater, Less};

    let shapes = [
        [(Foo, Less, Bar), (Foo, Greater, Boo)],
        [(Foo, Greater, Bar), (Foo, Less, Boo)],
        [(Foo, Less, Bar), (Bar, Less, Boo)],
    ];

    [AddressKind::ShortLived, AddressKind::LongLived]
        .into_iter()
        .flat_map(|kind| {
            shapes.iter().map(move |shape| {
                shape
                    .iter()
                    .map(|&(lhs, relation, rhs)| Comparison::new(kind, lhs, relation, rhs))
                    .collect::<Vec<_>>()
            })
        })
        .enumerate()
        .map(|(ordinal, clauses)| Round::new(ordinal, clauses))
        .collect()
}
