//! Per-tick capability shared by every simulated behaviour.

/// Something the host's update loop advances once per tick.
pub trait Tickable {
    /// Runs one tick of work. Must not block.
    fn tick(&mut self);
}

/// Ticks every item exactly once, in iteration order.
pub fn tick_all<'a, T, I>(items: I)
where
    T: Tickable + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    for item in items {
        item.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Default)]
    struct Counter(u32);

    impl Tickable for Counter {
        fn tick(&mut self) {
            self.0 += 1;
        }
    }

    #[rstest]
    fn ticks_each_item_once() {
        let mut counters = vec![Counter::default(), Counter(5)];
        tick_all(counters.iter_mut());
        let counts: Vec<u32> = counters.iter().map(|c| c.0).collect();
        assert_eq!(counts, vec![1, 6]);
    }

    #[rstest]
    fn accepts_trait_objects() {
        let mut first = Counter::default();
        let mut second = Counter::default();
        {
            let mut items: Vec<&mut dyn Tickable> = vec![&mut first, &mut second];
            tick_all(items.iter_mut().map(|item| &mut **item));
        }
        assert_eq!((first.0, second.0), (1, 1));
    }
}
