use crate::core::{DrawCommand, Surface};
use anyhow::anyhow;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by an `HtmlCanvasElement` and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }

    fn draw(&mut self, command: &DrawCommand) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear => {
                let (w, h) = self.size();
                ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
            }
            DrawCommand::FillRadialGradient {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let (cx, cy) = (center.x as f64, center.y as f64);
                let gradient = match ctx.create_radial_gradient(
                    cx,
                    cy,
                    *inner_radius as f64,
                    cx,
                    cy,
                    *outer_radius as f64,
                ) {
                    Ok(g) => g,
                    Err(e) => {
                        log::debug!("gradient error: {:?}", e);
                        return;
                    }
                };
                for stop in stops {
                    _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
                }
                let (w, h) = self.size();
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
            }
            DrawCommand::StrokeEllipse {
                center,
                radii,
                rotation,
                color,
                width,
            } => {
                ctx.begin_path();
                _ = ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    *rotation as f64,
                    0.0,
                    TAU,
                );
                ctx.set_stroke_style_str(&color.to_string());
                ctx.set_line_width(*width as f64);
                ctx.stroke();
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                ctx.set_fill_style_str(&color.to_string());
                ctx.fill();
            }
            DrawCommand::StrokeLine {
                from,
                to,
                color,
                width,
            } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.set_stroke_style_str(&color.to_string());
                ctx.set_line_width(*width as f64);
                ctx.stroke();
            }
        }
    }
}
