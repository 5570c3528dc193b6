use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, LABEL_SIZE_THRESHOLD};

const BACKGROUND: &str = "#ffffff";
const LABEL_COLOR: &str = "#333";
/// Opacity of everything outside the hovered neighbourhood.
const DIMMED_ALPHA: f64 = 0.15;

/// Draws one frame of the graph at its current positions.
pub trait GraphRenderer {
	fn draw(&self, state: &ForceGraphState);
}

pub struct CanvasRenderer {
	ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl GraphRenderer for CanvasRenderer {
	fn draw(&self, state: &ForceGraphState) {
		let ctx = &self.ctx;
		ctx.set_fill_style_str(BACKGROUND);
		ctx.fill_rect(0.0, 0.0, state.width, state.height);
		ctx.save();
		let _ = ctx.translate(state.transform.x, state.transform.y);
		let _ = ctx.scale(state.transform.k, state.transform.k);
		draw_edges(state, ctx);
		draw_nodes(state, ctx);
		draw_labels(state, ctx);
		ctx.restore();
	}
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let has_highlight = state.has_active_highlight();
	let nodes = state.graph.nodes();

	for edge in state.graph.edges() {
		if edge.source == edge.target {
			continue;
		}
		let ((x1, y1), (x2, y2)) = (state.positions[edge.source], state.positions[edge.target]);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		let (r1, r2) = (
			nodes[edge.source].attributes.size,
			nodes[edge.target].attributes.size,
		);
		if dist <= r1 + r2 {
			continue;
		}

		let lit = state.is_highlighted(edge.source) && state.is_highlighted(edge.target);
		ctx.set_global_alpha(if has_highlight && !lit { DIMMED_ALPHA } else { 1.0 });

		// Widths are screen-space, so they stay constant while zooming.
		let (width, arrow_size) = (edge.attributes.size / k, (4.0 + edge.attributes.size * 2.0) / k);
		let (ux, uy) = (dx / dist, dy / dist);
		ctx.set_stroke_style_str(edge.attributes.color);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow_size), y2 - uy * (r2 + arrow_size));
		ctx.stroke();

		ctx.set_fill_style_str(edge.attributes.color);
		let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let has_highlight = state.has_active_highlight();

	for (idx, (node, &(x, y))) in state.graph.nodes().iter().zip(&state.positions).enumerate() {
		let alpha = if has_highlight && !state.is_highlighted(idx) {
			DIMMED_ALPHA
		} else {
			1.0
		};
		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, node.attributes.size, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.attributes.color);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);

	if let Some(idx) = state.hover.node {
		let (x, y) = state.positions[idx];
		ctx.begin_path();
		let _ = ctx.arc(
			x,
			y,
			state.graph.nodes()[idx].attributes.size + 2.0 / state.transform.k,
			0.0,
			2.0 * PI,
		);
		ctx.set_stroke_style_str(LABEL_COLOR);
		ctx.set_line_width(1.5 / state.transform.k);
		ctx.stroke();
	}
}

fn draw_labels(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let has_highlight = state.has_active_highlight();
	ctx.set_fill_style_str(LABEL_COLOR);
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k));

	for (idx, (node, &(x, y))) in state.graph.nodes().iter().zip(&state.positions).enumerate() {
		let visible = if has_highlight {
			state.is_highlighted(idx)
		} else {
			node.attributes.size >= LABEL_SIZE_THRESHOLD
		};
		if visible {
			let _ = ctx.fill_text(&node.attributes.label, x + node.attributes.size + 3.0 / k, y + 4.0 / k);
		}
	}
}
