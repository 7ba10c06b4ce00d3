//! binding/context.rs
//! Context wrapper exposed to hosts.
//!
//! Design notes:
//! - The context lives in a slot that `take_context` empties. Every later
//!   call, a second `take_context` included, fails with
//!   `CodecError::UseAfterMove` through the host's error reporter.
//! - Mutators return `&mut Self` so hosts can offer call chaining.

use crate::binding::binder::Binder;
use crate::binding::traits::{BytesCodec, ErrorReporter};
use crate::binding::types::BindingError;
use crate::config::CodecConfig;
use crate::context::{CompressContext, SessionContext};
use crate::types::CodecError;

pub struct ContextBinding<T, B, F, E> {
    slot: Option<T>,
    binder: Binder<B, F, E>,
}

pub(crate) fn fail<Ctx, E>(reporter: &E, ctx: Ctx, error: CodecError) -> E::Failure
where
    Ctx: Copy,
    E: ErrorReporter<Ctx>,
{
    reporter.report(ctx, BindingError::from(error))
}

impl<T: SessionContext, B, F, E> ContextBinding<T, B, F, E> {
    pub fn create<Ctx>(ctx: Ctx, binder: Binder<B, F, E>) -> Result<Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        match T::create() {
            Ok(context) => Ok(Self { slot: Some(context), binder }),
            Err(e) => Err(fail(&binder.error, ctx, e)),
        }
    }

    /// Wrap an existing context.
    pub fn from_context(context: T, binder: Binder<B, F, E>) -> Self {
        Self { slot: Some(context), binder }
    }

    /// Run `op` on the held context, reporting any failure.
    fn on_context<Ctx, R>(
        &mut self,
        ctx: Ctx,
        op: impl FnOnce(&mut T) -> Result<R, CodecError>,
    ) -> Result<R, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        let result = match self.slot.as_mut() {
            Some(context) => op(context),
            None => Err(CodecError::UseAfterMove),
        };
        result.map_err(|e| fail(&self.binder.error, ctx, e))
    }

    pub fn reset_session<Ctx>(&mut self, ctx: Ctx) -> Result<&mut Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        self.on_context(ctx, |c| c.reset_session())?;
        Ok(self)
    }

    pub fn clear_dictionary<Ctx>(&mut self, ctx: Ctx) -> Result<&mut Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        self.on_context(ctx, |c| c.clear_dictionary())?;
        Ok(self)
    }

    pub fn load_dictionary<Ctx>(
        &mut self,
        ctx: Ctx,
        dict: &<B as BytesCodec<Ctx>>::Wire,
    ) -> Result<&mut Self, E::Failure>
    where
        Ctx: Copy,
        B: BytesCodec<Ctx>,
        E: ErrorReporter<Ctx>,
    {
        let Self { slot, binder } = &mut *self;
        let result = match slot.as_mut() {
            Some(context) => context.load_dictionary(binder.bytes.from_wire(ctx, dict)),
            None => Err(CodecError::UseAfterMove),
        };
        result.map_err(|e| fail(&binder.error, ctx, e))?;
        Ok(self)
    }

    /// Move the context out, leaving this binding permanently empty.
    pub fn take_context<Ctx>(&mut self, ctx: Ctx) -> Result<T, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        match self.slot.take() {
            Some(context) => Ok(context),
            None => Err(fail(&self.binder.error, ctx, CodecError::UseAfterMove)),
        }
    }

    /// Report a host-side validation failure through this binding's reporter.
    pub fn reject<Ctx>(&self, ctx: Ctx, error: CodecError) -> E::Failure
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        fail(&self.binder.error, ctx, error)
    }

    /// Whether `take_context` has already run.
    pub fn is_moved(&self) -> bool {
        self.slot.is_none()
    }

    /// Close the held context. A moved-out binding has nothing to close
    /// and succeeds.
    pub fn close<Ctx>(&mut self, ctx: Ctx) -> Result<(), E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        match self.slot.as_mut() {
            Some(context) => context.close().map_err(|e| fail(&self.binder.error, ctx, e)),
            None => Ok(()),
        }
    }
}

impl<B, F, E> ContextBinding<CompressContext, B, F, E> {
    pub fn set_compression_level<Ctx>(&mut self, ctx: Ctx, level: i32) -> Result<&mut Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        self.on_context(ctx, |c| c.set_compression_level(level))?;
        Ok(self)
    }

    pub fn set_checksum<Ctx>(&mut self, ctx: Ctx, enable: bool) -> Result<&mut Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        self.on_context(ctx, |c| c.set_checksum(enable))?;
        Ok(self)
    }

    pub fn set_original_size<Ctx>(&mut self, ctx: Ctx, size: u64) -> Result<&mut Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        self.on_context(ctx, |c| c.set_original_size(size))?;
        Ok(self)
    }

    /// Apply a prepared configuration.
    pub fn configure<Ctx>(
        &mut self,
        ctx: Ctx,
        config: &CodecConfig,
    ) -> Result<&mut Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        self.on_context(ctx, |c| config.apply(c))?;
        Ok(self)
    }
}
