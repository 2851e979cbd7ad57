use tokio::sync::{mpsc, oneshot};

use crate::domain::{Amount, LedgerAggregate, Transaction, TransactionLedger};

use super::AppError;

const COMMAND_BUFFER: usize = 32;

enum LedgerCommand {
    Record {
        amount: Amount,
        shares: Vec<f64>,
        reply: oneshot::Sender<Transaction>,
    },
    Aggregate {
        reply: oneshot::Sender<LedgerAggregate>,
    },
    Transactions {
        reply: oneshot::Sender<Vec<Transaction>>,
    },
}

/// Cloneable handle to a ledger owned by a single background task.
///
/// Every mutation runs on that task, so callers on any thread see the
/// transactions in the order the task received them.
#[derive(Clone)]
pub struct LedgerHandle {
    sender: mpsc::Sender<LedgerCommand>,
}

impl LedgerHandle {
    /// Move `ledger` into a new task and return a handle to it.
    /// The task stops once every handle has been dropped.
    pub fn spawn(ledger: TransactionLedger) -> Self {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run_ledger(ledger, receiver));
        Self { sender }
    }

    /// Append a transaction. Shares are not validated; see `split::validate`.
    pub async fn record(&self, amount: Amount, shares: Vec<f64>) -> Result<Transaction, AppError> {
        let (reply, rx) = oneshot::channel();
        self.send(LedgerCommand::Record {
            amount,
            shares,
            reply,
        })
        .await?;
        rx.await.map_err(|_| AppError::LedgerClosed)
    }

    pub async fn aggregate(&self) -> Result<LedgerAggregate, AppError> {
        let (reply, rx) = oneshot::channel();
        self.send(LedgerCommand::Aggregate { reply }).await?;
        rx.await.map_err(|_| AppError::LedgerClosed)
    }

    /// Snapshot of all transactions in recording order.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let (reply, rx) = oneshot::channel();
        self.send(LedgerCommand::Transactions { reply }).await?;
        rx.await.map_err(|_| AppError::LedgerClosed)
    }

    async fn send(&self, command: LedgerCommand) -> Result<(), AppError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| AppError::LedgerClosed)
    }
}

async fn run_ledger(mut ledger: TransactionLedger, mut receiver: mpsc::Receiver<LedgerCommand>) {
    while let Some(command) = receiver.recv().await {
        // A dropped reply receiver only means the caller gave up waiting
        match command {
            LedgerCommand::Record {
                amount,
                shares,
                reply,
            } => {
                let tx = ledger.record(amount, &shares).clone();
                let _ = reply.send(tx);
            }
            LedgerCommand::Aggregate { reply } => {
                let _ = reply.send(ledger.aggregate());
            }
            LedgerCommand::Transactions { reply } => {
                let _ = reply.send(ledger.all_transactions().to_vec());
            }
        }
    }
    log::debug!("Ledger task stopped after {} transactions", ledger.len());
}
