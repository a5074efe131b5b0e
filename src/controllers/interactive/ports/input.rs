use crate::core::controls::snapshot::InputSnapshot;

/// Non-blocking input source, read once per frame.
pub trait InputPort {
    fn poll(&mut self) -> InputSnapshot;
}
