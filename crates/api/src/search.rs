use std::collections::HashSet;

use crate::{Professional, SearchResponse};

/// One display page of professionals.
///
/// Sponsored entries come first in backend order, followed by organic
/// entries not already shown, truncated to the page cap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
	pub entries: Vec<Professional>,
	/// Number of leading entries that are paid placements.
	pub sponsored: usize,
	/// Total organic matches reported by the backend.
	pub total: Option<u64>,
}

impl SearchPage {
	pub fn assemble(response: SearchResponse, cap: usize) -> Self {
		let mut seen = HashSet::new();
		let mut entries = Vec::with_capacity(cap.min(response.sponsorises.len() + response.organiques.len()));

		for pro in response.sponsorises {
			if entries.len() == cap {
				break;
			}
			if seen.insert(pro.id) {
				entries.push(pro);
			}
		}
		let sponsored = entries.len();

		for pro in response.organiques {
			if entries.len() == cap {
				break;
			}
			if seen.insert(pro.id) {
				entries.push(pro);
			}
		}

		Self {
			entries,
			sponsored,
			total: response.total,
		}
	}

	pub fn is_sponsored(&self, index: usize) -> bool {
		index < self.sponsored
	}
}
