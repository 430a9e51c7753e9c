//! Scripted consumer that records the keys it is offered.

use std::cell::RefCell;

use keyfold_primitives::KeyInput;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::dispatch::{KeyConsumer, ProcessResult};

/// A [`KeyConsumer`] with a fixed response policy.
///
/// Keys listed with [`reject`](Self::reject) fail `can_process`; keys listed with
/// [`respond`](Self::respond) get that result from `process`; everything else gets the
/// default result ([`ProcessResult::Handled`] unless changed).
#[derive(Debug, Clone)]
pub struct RecordingConsumer {
	rejected: FxHashSet<KeyInput>,
	responses: FxHashMap<KeyInput, ProcessResult>,
	default_result: ProcessResult,
	offered: RefCell<Vec<KeyInput>>,
	processed: Vec<KeyInput>,
}

impl Default for RecordingConsumer {
	fn default() -> Self {
		Self::new()
	}
}

impl RecordingConsumer {
	/// Creates a consumer that accepts and handles every key.
	pub fn new() -> Self {
		Self {
			rejected: FxHashSet::default(),
			responses: FxHashMap::default(),
			default_result: ProcessResult::Handled,
			offered: RefCell::new(Vec::new()),
			processed: Vec::new(),
		}
	}

	/// Makes `can_process` return false for `input`.
	pub fn reject(mut self, input: KeyInput) -> Self {
		self.rejected.insert(input);
		self
	}

	/// Makes `process` return `result` for `input`.
	pub fn respond(mut self, input: KeyInput, result: ProcessResult) -> Self {
		self.responses.insert(input, result);
		self
	}

	/// Sets the result for keys without an explicit response.
	pub fn with_default(mut self, result: ProcessResult) -> Self {
		self.default_result = result;
		self
	}

	/// Every key passed to `can_process`, in order.
	pub fn offered(&self) -> Vec<KeyInput> {
		self.offered.borrow().clone()
	}

	/// Every key passed to `process`, in order.
	pub fn processed(&self) -> &[KeyInput] {
		&self.processed
	}

	/// Drains the processed log, leaving the policy in place.
	pub fn take_processed(&mut self) -> Vec<KeyInput> {
		self.offered.get_mut().clear();
		std::mem::take(&mut self.processed)
	}
}

impl KeyConsumer for RecordingConsumer {
	fn can_process(&self, input: &KeyInput) -> bool {
		self.offered.borrow_mut().push(*input);
		!self.rejected.contains(input)
	}

	fn process(&mut self, input: KeyInput) -> ProcessResult {
		self.processed.push(input);
		self.responses.get(&input).copied().unwrap_or(self.default_result)
	}
}
