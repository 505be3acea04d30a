//! Plain-text rendering of results for stdout.

use annuaire_api::{City, SearchPage, SubCategory};
use annuaire_typeahead::{Outcome, Phase, TypeaheadState};

pub fn city(city: &City) -> String {
	let details: Vec<&str> = [city.code_postal_principal.as_str(), city.departement.as_str()]
		.into_iter()
		.filter(|s| !s.is_empty())
		.collect();
	if details.is_empty() {
		city.nom.clone()
	} else {
		format!("{} ({})", city.nom, details.join(", "))
	}
}

pub fn sub_category(sub: &SubCategory) -> String {
	if sub.categorie_nom.is_empty() {
		sub.nom.clone()
	} else {
		format!("{} ({})", sub.nom, sub.categorie_nom)
	}
}

/// One status line per published typeahead state.
pub fn state_line<T>(state: &TypeaheadState<T>, item: impl Fn(&T) -> String) -> String {
	let items = || state.results.iter().map(&item).collect::<Vec<_>>().join(" | ");
	match state.phase {
		Phase::Idle => "idle".to_string(),
		Phase::Debouncing | Phase::Loading if state.results.is_empty() => "loading".to_string(),
		Phase::Debouncing | Phase::Loading => format!("loading [{}]", items()),
		Phase::Settled(Outcome::Success) if state.results.is_empty() => "no results".to_string(),
		Phase::Settled(Outcome::Success) => format!("{} result(s): {}", state.results.len(), items()),
		Phase::Settled(Outcome::Error) => format!("error: {}", state.error.as_deref().unwrap_or_default()),
		Phase::Disposed => "closed".to_string(),
	}
}

pub fn search_page(page: &SearchPage) -> String {
	let mut out = String::new();
	for (index, pro) in page.entries.iter().enumerate() {
		let marker = if page.is_sponsored(index) { "*" } else { " " };
		out.push_str(&format!("{marker} {:>2}. {}", index + 1, pro.nom));
		if let Some(ville) = &pro.ville {
			out.push_str(&format!(", {ville}"));
		}
		if let Some(note) = pro.note_moyenne {
			out.push_str(&format!(" [{note:.1}/5, {} avis]", pro.nombre_avis));
		}
		out.push('\n');
	}
	match page.total {
		Some(total) => out.push_str(&format!("{} shown, {total} organic match(es)\n", page.entries.len())),
		None => out.push_str(&format!("{} shown\n", page.entries.len())),
	}
	out
}

#[cfg(test)]
mod tests {
	use annuaire_api::Professional;
	use pretty_assertions::assert_eq;

	use super::*;

	fn lyon() -> City {
		City {
			id: 1,
			nom: "Lyon".into(),
			code_postal_principal: "69001".into(),
			departement: "Rhône".into(),
			slug: "lyon".into(),
		}
	}

	#[test]
	fn city_lists_known_details() {
		assert_eq!(city(&lyon()), "Lyon (69001, Rhône)");
		let bare = City {
			code_postal_principal: String::new(),
			departement: String::new(),
			..lyon()
		};
		assert_eq!(city(&bare), "Lyon");
	}

	#[test]
	fn state_lines_follow_phase() {
		let mut state = TypeaheadState::idle(1);
		assert_eq!(state_line(&state, city), "idle");

		state.phase = Phase::Debouncing;
		state.loading = true;
		assert_eq!(state_line(&state, city), "loading");

		state.phase = Phase::Settled(Outcome::Success);
		state.loading = false;
		state.results = vec![lyon()];
		assert_eq!(state_line(&state, city), "1 result(s): Lyon (69001, Rhône)");

		state.phase = Phase::Loading;
		assert_eq!(state_line(&state, city), "loading [Lyon (69001, Rhône)]");

		state.phase = Phase::Settled(Outcome::Error);
		state.results.clear();
		state.error = Some("network down".into());
		assert_eq!(state_line(&state, city), "error: network down");
	}

	#[test]
	fn search_page_marks_sponsored_rows() {
		let page = SearchPage {
			entries: vec![
				Professional {
					id: 1,
					nom: "Plomberie Martin".into(),
					slug: "plomberie-martin".into(),
					ville: Some("Lyon".into()),
					sous_categorie: None,
					note_moyenne: Some(4.5),
					nombre_avis: 12,
				},
				Professional {
					id: 2,
					nom: "Dupont".into(),
					slug: "dupont".into(),
					ville: None,
					sous_categorie: None,
					note_moyenne: None,
					nombre_avis: 0,
				},
			],
			sponsored: 1,
			total: Some(7),
		};
		assert_eq!(
			search_page(&page),
			"*  1. Plomberie Martin, Lyon [4.5/5, 12 avis]\n   2. Dupont\n2 shown, 7 organic match(es)\n"
		);
	}
}
