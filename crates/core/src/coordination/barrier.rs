// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Join barrier for participant tasks
//!
//! A [`Cohort`] is every task of one role. [`TwoPhaseJoin`] joins the demand
//! side first, runs the shutdown step, then joins the supply side.

use crate::error::CoordinatorError;
use crate::event::Role;
use std::future::Future;
use tokio::task::JoinSet;

/// All tasks of one role
pub struct Cohort<T> {
    role: Role,
    tasks: JoinSet<Result<T, CoordinatorError>>,
}

impl<T: Send + 'static> Cohort<T> {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            tasks: JoinSet::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Result<T, CoordinatorError>> + Send + 'static,
    {
        self.tasks.spawn(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for every task. The first failure aborts the rest of the cohort
    /// and is returned; outputs come back in completion order.
    pub async fn join(mut self) -> Result<Vec<T>, CoordinatorError> {
        let mut outputs = Vec::with_capacity(self.tasks.len());

        while let Some(joined) = self.tasks.join_next().await {
            let result = joined.map_err(|source| CoordinatorError::ParticipantFailed {
                role: self.role,
                source,
            });

            match result.and_then(|output| output) {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    tracing::error!(role = %self.role, error = %e, "participant failed, aborting cohort");
                    self.tasks.abort_all();
                    return Err(e);
                }
            }
        }

        Ok(outputs)
    }
}

/// Demand cohort, shutdown step, supply cohort
pub struct TwoPhaseJoin<D, S> {
    demand: Cohort<D>,
    supply: Cohort<S>,
}

impl<D: Send + 'static, S: Send + 'static> TwoPhaseJoin<D, S> {
    pub fn new(demand: Cohort<D>, supply: Cohort<S>) -> Self {
        Self { demand, supply }
    }

    /// Run both phases.
    ///
    /// `shutdown` runs exactly once, after the last demand-side task finished
    /// and before the supply side is joined. On a demand-side failure it never
    /// runs and the supply cohort is dropped, which aborts its tasks.
    pub async fn join<F>(self, shutdown: F) -> Result<(Vec<D>, Vec<S>), CoordinatorError>
    where
        F: FnOnce(),
    {
        let Self { demand, supply } = self;

        let demand_role = demand.role();
        let demand_out = demand.join().await?;
        tracing::info!(role = %demand_role, joined = demand_out.len(), "demand side finished");

        shutdown();

        let supply_role = supply.role();
        let supply_out = supply.join().await?;
        tracing::info!(role = %supply_role, joined = supply_out.len(), "supply side finished");

        Ok((demand_out, supply_out))
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
