//! Thread pinning for run timing.
//!
//! On Linux the calling thread is restricted to the core it is running on
//! (via `libc::sched_setaffinity`) and the previous mask is restored when the
//! guard drops. Elsewhere pinning is a no-op and the guard reports "not pinned".

#[cfg(target_os = "linux")]
mod platform {
    /// Saved affinity mask of the calling thread.
    pub struct SavedMask(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save() -> Option<SavedMask> {
        // SAFETY: the set is zero-initialised and sized for the call.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            let rc = libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set);
            (rc == 0).then_some(SavedMask(set))
        }
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: CPU_SET bounds the core index against the set size.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &SavedMask) -> bool {
        // SAFETY: the mask came from sched_getaffinity on this thread.
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedMask;

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save() -> Option<SavedMask> {
        None
    }
    pub fn pin(_core: usize) -> bool {
        false
    }
    pub fn restore(_saved: &SavedMask) -> bool {
        true
    }
}

/// RAII guard: pins on creation, restores the original mask on drop.
pub struct ThreadPin {
    core: Option<usize>,
    saved: Option<platform::SavedMask>,
}

impl ThreadPin {
    /// Pin the calling thread to the core it is currently running on.
    pub fn current_core() -> Self {
        let unpinned = Self {
            core: None,
            saved: None,
        };
        let Some(core) = platform::current_cpu() else {
            return unpinned;
        };
        let Some(saved) = platform::save() else {
            return unpinned;
        };
        if !platform::pin(core) {
            tracing::trace!(core, "thread pinning refused");
            return unpinned;
        }
        Self {
            core: Some(core),
            saved: Some(saved),
        }
    }

    /// Core this thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl std::fmt::Debug for ThreadPin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadPin").field("core", &self.core).finish()
    }
}

impl Drop for ThreadPin {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if !platform::restore(&saved) {
                tracing::warn!("failed to restore thread affinity");
            }
        }
    }
}
