use std::rc::Rc;

/// Holds the artifact currently bound to a consumer (renderer, physics).
///
/// Replacement is all-or-nothing: the new value is fully built before it
/// is swapped in, and a failed build leaves the old value current.
/// Consumers that cloned the `Rc` keep reading their buffer until they
/// pick up the new one.
#[derive(Debug)]
pub struct ArtifactSlot<T> {
    current: Option<Rc<T>>,
    generation: u64,
}

impl<T> Default for ArtifactSlot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> ArtifactSlot<T> {
    pub fn empty() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    pub fn current(&self) -> Option<Rc<T>> {
        self.current.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Bumped on every successful swap.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swap in an already-built value, returning the previous one.
    pub fn replace(&mut self, value: T) -> Option<Rc<T>> {
        self.generation += 1;
        self.current.replace(Rc::new(value))
    }

    /// Build a replacement and swap it in only if the build succeeds.
    pub fn replace_with<E, F>(&mut self, build: F) -> Result<Rc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = Rc::new(build()?);
        self.generation += 1;
        self.current = Some(Rc::clone(&value));
        Ok(value)
    }
}
