use std::{convert::Infallible, time};

use log::debug;

use crate::filter::{self, Convolution, CombineOp, FilterBase, PointOp, WindowOp};
use crate::img::Raster;
use crate::img_err::ImgError;
use crate::utils::LinesIter;

use super::{DoubleBuffer, ProgressProvider};


/// Ordered passes run over a double buffer.
///
/// Point passes rewrite `active` in place. Window, convolution and binary
/// passes write `scratch` and swap, so after every pass `active` holds the
/// latest result.
#[derive(Default)]
pub struct PassesLine {
    passes: Vec<FilterBase>,
}

impl PassesLine {
    const NAME_SEPARATOR: char = ':';

    pub fn new() -> Self {
        PassesLine { passes: Vec::new() }
    }

    pub fn add_point(&mut self, op: PointOp) -> &mut Self {
        self.add_filter(Box::new(op))
    }

    /// Binary pass with `scratch` as the left operand and `active` as the right.
    pub fn add_combine(&mut self, op: CombineOp) -> &mut Self {
        self.add_filter(Box::new(op))
    }

    pub fn add_window(&mut self, op: WindowOp) -> &mut Self {
        self.add_filter(Box::new(op))
    }

    pub fn add_convolution(&mut self, conv: Convolution) -> &mut Self {
        self.add_filter(Box::new(conv))
    }

    pub fn add_filter(&mut self, filter: FilterBase) -> &mut Self {
        self.passes.push(filter);
        self
    }

    pub fn passes(&self) -> &[FilterBase] { &self.passes }
    pub fn len(&self) -> usize { self.passes.len() }
    pub fn is_empty(&self) -> bool { self.passes.is_empty() }

    /// Runs every pass in order and returns the final active raster.
    pub fn run(&self, input: Raster) -> Raster {
        match self.run_inspect(input, |_, _| Ok::<(), Infallible>(())) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Runs the passes over `buffers` as they are.
    pub fn run_buffers(&self, buffers: &mut DoubleBuffer) {
        for (pass_num, pass) in self.passes.iter().enumerate() {
            self.run_pass(pass_num, pass, buffers);
        }
    }

    /// Like `run`, but hands every intermediate result to `on_pass` along
    /// with the pass index. The first error stops the run.
    pub fn run_inspect<E, F>(&self, input: Raster, mut on_pass: F) -> Result<Raster, E>
    where
        F: FnMut(usize, &Raster) -> Result<(), E>,
    {
        let mut buffers = DoubleBuffer::new(input);

        for (pass_num, pass) in self.passes.iter().enumerate() {
            self.run_pass(pass_num, pass, &mut buffers);
            on_pass(pass_num, buffers.active())?;
        }

        Ok(buffers.into_active())
    }

    fn run_pass(&self, pass_num: usize, pass: &FilterBase, buffers: &mut DoubleBuffer) {
        let started = time::Instant::now();

        let mut prog_prov = ProgressProvider::new(pass.get_steps_num(buffers.active()));
        pass.process(buffers, &mut prog_prov);
        debug_assert!(prog_prov.all_actions_completed());

        debug!("pass {}/{} '{}' took {} ms",
            pass_num + 1, self.passes.len(), pass.get_description(), started.elapsed().as_millis());
    }

    /// One pass per line: `Name` or `Name: p1, p2, ...`.
    pub fn try_from_string(text: &str) -> Result<Self, ImgError> {
        let lines_iter = LinesIter::new(text);
        let mut line = PassesLine { passes: Vec::with_capacity(lines_iter.len()) };

        for (line_num, pass_str) in lines_iter.enumerate() {
            let (save_name, content) = match pass_str.find(Self::NAME_SEPARATOR) {
                Some(ind) => (&pass_str[..ind], &pass_str[ind + 1..]),
                None => (pass_str, ""),
            };

            let pass = filter::try_parce_filter(save_name.trim(), content)
                .map_err(|err| match err {
                    ImgError::Parse(msg) => ImgError::Parse(format!("line {}: {}", line_num + 1, msg)),
                    other => other,
                })?;
            line.passes.push(pass);
        }

        Ok(line)
    }

    pub fn params_to_string(&self) -> String {
        let mut text = String::new();

        for pass in self.passes.iter() {
            text.push_str(&pass.get_save_name());
            if let Some(params) = pass.params_to_string() {
                text.push(Self::NAME_SEPARATOR);
                text.push(' ');
                text.push_str(&params);
            }
            text.push('\n');
        }

        text
    }
}

impl Clone for PassesLine {
    fn clone(&self) -> Self {
        PassesLine { passes: self.passes.iter().map(|p| p.get_copy()).collect() }
    }
}
