use std::io::{BufRead, Write};

use chain::{
    ActivationContext, Config, DispatchOutcome, Dispatcher, HandlerRegistry, ProvenanceStore,
    tokenize,
};
use memory::AddressSpace;
use tracing::{debug, info};

use crate::error::HarnessError;
use crate::input::ChainReader;
use crate::round::{Round, standard_rounds};

/// Runs the rounds in order, one chain per round, stopping at the first
/// round whose assertion does not hold.
///
/// The harness owns the provenance store for the whole run and never
/// resets it, so a round sees every record left by the rounds before it.
/// Handlers that have not run yet compare as the null address.
pub struct StageHarness<S, R, W> {
    space: S,
    store: ProvenanceStore,
    registry: HandlerRegistry,
    rounds: Vec<Round>,
    input: ChainReader<R>,
    out: W,
    verbose: bool,
}

impl<S, R, W> StageHarness<S, R, W>
where
    S: AddressSpace,
    R: BufRead,
    W: Write,
{
    pub fn new(space: S, input: R, out: W) -> Self {
        Self {
            space,
            store: ProvenanceStore::new(),
            registry: HandlerRegistry::standard(),
            rounds: standard_rounds(),
            input: ChainReader::new(input),
            out,
            verbose: false,
        }
    }

    pub fn with_rounds(mut self, rounds: Vec<Round>) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Dump the provenance table after every passing round.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn store(&self) -> &ProvenanceStore {
        &self.store
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn banner(&mut self, pid: u32) -> Result<(), HarnessError> {
        writeln!(self.out, "Welcome to level{}!", Config::LEVEL)?;
        writeln!(self.out, "Current process's PID: {}", pid)?;
        Ok(())
    }

    /// Runs every round. Returns the number of rounds passed, which on
    /// success is all of them.
    pub fn run(&mut self) -> Result<usize, HarnessError> {
        for index in 0..self.rounds.len() {
            self.run_round(index)?;
            writeln!(self.out, "Good job!")?;
            writeln!(self.out, "Next assertion!")?;
        }

        writeln!(self.out, "Congratulation!")?;
        self.out.flush()?;
        Ok(self.rounds.len())
    }

    /// Prompts for, dispatches and checks a single round.
    pub fn run_round(&mut self, index: usize) -> Result<DispatchOutcome, HarnessError> {
        let round = self.rounds.get(index).ok_or(HarnessError::NoSuchRound {
            index,
            rounds: self.rounds.len(),
        })?;
        writeln!(self.out, "Current assertion is: `{}`", round.description())?;
        writeln!(
            self.out,
            "Please input the correct function chain to pass the assertion (e.g. foo-bar-boo): "
        )?;
        self.out.flush()?;

        let line = self
            .input
            .read_chain()?
            .ok_or(HarnessError::InputClosed { round: round.ordinal })?;

        let outcome = {
            let mut ctx = ActivationContext::new(&mut self.space, &mut self.store, &mut self.out);
            Dispatcher::new(&self.registry)
                .dispatch(tokenize(&line, Config::CHAIN_DELIMITER), &mut ctx)?
        };

        if let Err(failed) = round.check(&self.store) {
            debug!(round = round.ordinal, chain = %line, assertion = %failed, "assertion failed");
            return Err(HarnessError::AssertionFailed {
                round: round.ordinal,
                assertion: failed.to_string(),
            });
        }

        info!(
            round = round.ordinal,
            chain = %line,
            activated = outcome.activated.len(),
            "assertion passed"
        );
        if self.verbose {
            self.store.dump(&mut self.out)?;
        }
        Ok(outcome)
    }
}
