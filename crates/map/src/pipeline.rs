//! Ordered keyboard handling with the tool dispatcher in front.
use input::{KeyboardEvent, MouseEvent};
use tracing::trace;

use crate::{InputResult, dispatcher::ToolDispatcher, surface::Surface};

/// A step of the keyboard pipeline.
pub trait KeyStage {
    fn key_event(&mut self, surface: &mut dyn Surface, event: &KeyboardEvent) -> InputResult;
}

impl KeyStage for ToolDispatcher {
    fn key_event(&mut self, surface: &mut dyn Surface, event: &KeyboardEvent) -> InputResult {
        ToolDispatcher::key_event(self, surface, event)
    }
}

struct FnStage<F>(F);

impl<F> KeyStage for FnStage<F>
where
    F: FnMut(&mut dyn Surface, &KeyboardEvent) -> InputResult,
{
    fn key_event(&mut self, surface: &mut dyn Surface, event: &KeyboardEvent) -> InputResult {
        (self.0)(surface, event)
    }
}

/// Wraps a closure as a pipeline stage.
pub fn stage<F>(handler: F) -> Box<dyn KeyStage>
where
    F: FnMut(&mut dyn Surface, &KeyboardEvent) -> InputResult + 'static,
{
    Box::new(FnStage(handler))
}

/// Key events go to the dispatcher first and then to the other stages in the order they were
/// pushed, until one of them handles the event.
pub struct InputPipeline {
    dispatcher: ToolDispatcher,
    stages: Vec<Box<dyn KeyStage>>,
}

impl InputPipeline {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher,
            stages: Vec::new(),
        }
    }

    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }
    pub fn dispatcher_mut(&mut self) -> &mut ToolDispatcher {
        &mut self.dispatcher
    }

    pub fn push_stage(&mut self, stage: Box<dyn KeyStage>) {
        self.stages.push(stage);
    }

    pub fn key_event(&mut self, surface: &mut dyn Surface, event: &KeyboardEvent) -> InputResult {
        if self.dispatcher.key_event(surface, event).is_handled() {
            return InputResult::Handled;
        }
        for (index, stage) in self.stages.iter_mut().enumerate() {
            if stage.key_event(surface, event).is_handled() {
                trace!("key event handled by stage {index}");
                return InputResult::Handled;
            }
        }
        InputResult::Unhandled
    }

    pub fn mouse_event(&mut self, surface: &mut dyn Surface, event: &MouseEvent) -> InputResult {
        self.dispatcher.mouse_event(surface, event)
    }
}
