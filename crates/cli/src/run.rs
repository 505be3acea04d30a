//! Line-driven typeahead session.

use std::time::Duration;

use annuaire_typeahead::{Lookup, TypeaheadController, TypeaheadState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::render;

/// Feeds every `input` line to `controller` as the next query and writes one
/// status line per observed state to `out`.
///
/// Returns once input closes and the last lookup settled (or `settle`
/// elapsed). The settled state is written before the controller is disposed.
pub async fn typeahead<L, R, W, F>(
	mut controller: TypeaheadController<L>,
	filters: L::Filters,
	input: R,
	mut out: W,
	settle: Duration,
	render_item: F,
) -> anyhow::Result<()>
where
	L: Lookup,
	R: AsyncBufRead + Unpin,
	W: AsyncWrite + Unpin,
	F: Fn(&L::Item) -> String,
{
	let mut updates = controller.subscribe();
	let mut lines = input.lines();

	loop {
		tokio::select! {
			line = lines.next_line() => match line? {
				Some(line) => {
					debug!(query = %line, "input");
					controller.set_input(line, filters.clone());
				}
				None => break,
			},
			changed = updates.changed() => {
				if changed.is_err() {
					break;
				}
				let (line, _) = render_latest(&mut updates, &render_item);
				write_line(&mut out, &line).await?;
			}
		}
	}

	match tokio::time::timeout(settle, write_until_settled(&mut updates, &mut out, &render_item)).await {
		Ok(written) => written?,
		Err(_) => warn!(
			timeout_ms = u64::try_from(settle.as_millis()).unwrap_or(u64::MAX),
			"last lookup did not settle"
		),
	}

	controller.dispose();
	out.flush().await?;
	Ok(())
}

/// Writes every state published until one is no longer loading.
async fn write_until_settled<T, W, F>(
	updates: &mut watch::Receiver<TypeaheadState<T>>,
	out: &mut W,
	render_item: &F,
) -> std::io::Result<()>
where
	W: AsyncWrite + Unpin,
	F: Fn(&T) -> String,
{
	loop {
		if updates.has_changed().unwrap_or(false) {
			let (line, loading) = render_latest(updates, render_item);
			write_line(out, &line).await?;
			if !loading {
				return Ok(());
			}
		} else if !updates.borrow().loading {
			return Ok(());
		}
		if updates.changed().await.is_err() {
			return Ok(());
		}
	}
}

fn render_latest<T, F>(updates: &mut watch::Receiver<TypeaheadState<T>>, render_item: &F) -> (String, bool)
where
	F: Fn(&T) -> String,
{
	let state = updates.borrow_and_update();
	(render::state_line(&*state, render_item), state.loading)
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> std::io::Result<()> {
	out.write_all(line.as_bytes()).await?;
	out.write_all(b"\n").await
}
