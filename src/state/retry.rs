// Bounded retry bookkeeping: attempt, check, then stop or go again.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryStep {
    Again,
    Settled { attempts: u32, converged: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryBudget {
    max_attempts: u32,
    attempts: u32,
}

impl RetryBudget {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            attempts: 0,
        }
    }

    /// Feed the latest predicate result. `Again` consumes one attempt.
    pub fn step(&mut self, converged: bool) -> RetryStep {
        if converged || self.attempts >= self.max_attempts {
            return RetryStep::Settled {
                attempts: self.attempts,
                converged,
            };
        }
        self.attempts += 1;
        RetryStep::Again
    }
}
