/// Selects one of the two buffers of a [`DoubleBuffered`] pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BufferIndex {
    #[default]
    Zero,
    One,
}

impl BufferIndex {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

pub struct DoubleBuffered<A> {
    buffers: [A; 2],
}

impl<A: Clone> DoubleBuffered<A> {
    pub fn new(initial: A) -> Self {
        Self {
            buffers: [initial.clone(), initial],
        }
    }
}

impl<A> DoubleBuffered<A> {
    pub fn get(&self, index: BufferIndex) -> &A {
        &self.buffers[index.as_usize()]
    }

    pub fn get_mut(&mut self, index: BufferIndex) -> &mut A {
        &mut self.buffers[index.as_usize()]
    }

    pub fn into_inner(self) -> [A; 2] {
        self.buffers
    }
}
