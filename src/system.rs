use log::info;

/// Processor counts reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreCounts {
    pub physical: usize,
    pub logical: usize,
}

impl CoreCounts {
    pub fn detect() -> Self {
        let counts = Self {
            physical: num_cpus::get_physical(),
            logical: num_cpus::get(),
        };
        info!(
            "physical_cpus={} logical_cpus={}",
            counts.physical, counts.logical
        );
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reports_at_least_one_core() {
        let counts = CoreCounts::detect();
        assert_ne!(0, counts.physical);
        assert_ne!(0, counts.logical);
    }
}
