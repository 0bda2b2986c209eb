//! The `TransactionData` schema.
//!
//! Only the transfer and pay kinds are modelled; Move calls and publishes are
//! left to the full node types. The serialized shape follows the protocol
//! layout: a kind is always wrapped as a single (non-batch) transaction, and
//! variant indices leave room for the unmodelled kinds so BCS output lines up
//! with what a validator decodes.

use serde::{Deserialize, Serialize};

use sui_canon_core::{ObjectRef, SuiAddress};

use crate::canonical::TypeTagged;

/// What a transaction does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "KindRepr", from = "KindRepr")]
pub enum TransactionKind {
    /// Move an owned object to a new owner.
    TransferObject {
        recipient: SuiAddress,
        object_ref: ObjectRef,
    },
    /// Send SUI out of the gas coin. `None` sends the whole coin.
    TransferSui {
        recipient: SuiAddress,
        amount: Option<u64>,
    },
    /// Split and merge coins into per-recipient amounts.
    Pay {
        coins: Vec<ObjectRef>,
        recipients: Vec<SuiAddress>,
        amounts: Vec<u64>,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "TransactionKind")]
enum KindRepr {
    Single(SingleKind),
}

// Variant order is wire format.
#[derive(Serialize, Deserialize)]
#[serde(rename = "SingleTransactionKind")]
enum SingleKind {
    TransferObject(TransferObject),
    Publish(Unmodelled),
    Call(Unmodelled),
    TransferSui(TransferSui),
    Pay(Pay),
}

/// A kind this crate cannot build or decode.
#[derive(Serialize, Deserialize)]
enum Unmodelled {}

#[derive(Serialize, Deserialize)]
struct TransferObject {
    recipient: SuiAddress,
    object_ref: ObjectRef,
}

#[derive(Serialize, Deserialize)]
struct TransferSui {
    recipient: SuiAddress,
    amount: Option<u64>,
}

#[derive(Serialize, Deserialize)]
struct Pay {
    coins: Vec<ObjectRef>,
    recipients: Vec<SuiAddress>,
    amounts: Vec<u64>,
}

impl From<TransactionKind> for KindRepr {
    fn from(kind: TransactionKind) -> Self {
        let single = match kind {
            TransactionKind::TransferObject {
                recipient,
                object_ref,
            } => SingleKind::TransferObject(TransferObject {
                recipient,
                object_ref,
            }),
            TransactionKind::TransferSui { recipient, amount } => {
                SingleKind::TransferSui(TransferSui { recipient, amount })
            }
            TransactionKind::Pay {
                coins,
                recipients,
                amounts,
            } => SingleKind::Pay(Pay {
                coins,
                recipients,
                amounts,
            }),
        };
        KindRepr::Single(single)
    }
}

impl From<KindRepr> for TransactionKind {
    fn from(repr: KindRepr) -> Self {
        let KindRepr::Single(single) = repr;
        match single {
            SingleKind::TransferObject(t) => TransactionKind::TransferObject {
                recipient: t.recipient,
                object_ref: t.object_ref,
            },
            SingleKind::Publish(never) | SingleKind::Call(never) => match never {},
            SingleKind::TransferSui(t) => TransactionKind::TransferSui {
                recipient: t.recipient,
                amount: t.amount,
            },
            SingleKind::Pay(p) => TransactionKind::Pay {
                coins: p.coins,
                recipients: p.recipients,
                amounts: p.amounts,
            },
        }
    }
}

/// A transaction before signing. Field order is wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    pub kind: TransactionKind,
    pub sender: SuiAddress,
    pub gas_payment: ObjectRef,
    pub gas_price: u64,
    pub gas_budget: u64,
}

impl TypeTagged for TransactionData {
    const TYPE_TAG: &'static str = "TransactionData";
}

impl TransactionData {
    pub fn new(
        kind: TransactionKind,
        sender: SuiAddress,
        gas_payment: ObjectRef,
        gas_price: u64,
        gas_budget: u64,
    ) -> Self {
        Self {
            kind,
            sender,
            gas_payment,
            gas_price,
            gas_budget,
        }
    }

    pub fn new_transfer_sui(
        recipient: SuiAddress,
        sender: SuiAddress,
        amount: Option<u64>,
        gas_payment: ObjectRef,
        gas_price: u64,
        gas_budget: u64,
    ) -> Self {
        Self::new(
            TransactionKind::TransferSui { recipient, amount },
            sender,
            gas_payment,
            gas_price,
            gas_budget,
        )
    }

    pub fn new_transfer_object(
        recipient: SuiAddress,
        object_ref: ObjectRef,
        sender: SuiAddress,
        gas_payment: ObjectRef,
        gas_price: u64,
        gas_budget: u64,
    ) -> Self {
        Self::new(
            TransactionKind::TransferObject {
                recipient,
                object_ref,
            },
            sender,
            gas_payment,
            gas_price,
            gas_budget,
        )
    }

    /// Objects the transaction reads or writes, gas coin first.
    pub fn input_objects(&self) -> Vec<ObjectRef> {
        let mut objects = vec![self.gas_payment];
        match &self.kind {
            TransactionKind::TransferObject { object_ref, .. } => objects.push(*object_ref),
            TransactionKind::TransferSui { .. } => {}
            TransactionKind::Pay { coins, .. } => objects.extend(coins.iter().copied()),
        }
        objects
    }
}
