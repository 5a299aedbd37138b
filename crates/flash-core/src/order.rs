//! Quiz access order.
//!
//! A doubly-linked list threaded through slot indices of the store's arena.
//! New slots join at the back, and quizzing a card moves its slot to the back,
//! so the front is always the least recently asked card.

#[derive(Debug, Clone, Copy, Default)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
    linked: bool,
}

#[derive(Debug, Default)]
pub(crate) struct AccessOrder {
    links: Vec<Link>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl AccessOrder {
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn front(&self) -> Option<usize> {
        self.head
    }

    /// Append `slot` at the back. A slot that is already linked is moved.
    pub(crate) fn push_back(&mut self, slot: usize) {
        if slot >= self.links.len() {
            self.links.resize(slot + 1, Link::default());
        }
        if self.links[slot].linked {
            self.unlink(slot);
        }

        self.links[slot] = Link {
            prev: self.tail,
            next: None,
            linked: true,
        };
        match self.tail {
            Some(tail) => self.links[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Detach `slot` from the list. Unlinked slots are ignored.
    pub(crate) fn unlink(&mut self, slot: usize) {
        let Some(link) = self.links.get(slot).copied() else {
            return;
        };
        if !link.linked {
            return;
        }

        match link.prev {
            Some(prev) => self.links[prev].next = link.next,
            None => self.head = link.next,
        }
        match link.next {
            Some(next) => self.links[next].prev = link.prev,
            None => self.tail = link.prev,
        }
        self.links[slot] = Link::default();
        self.len -= 1;
    }

    pub(crate) fn move_to_back(&mut self, slot: usize) {
        if self.tail != Some(slot) {
            self.push_back(slot);
        }
    }

    /// Slots from front (least recently asked) to back.
    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, |&slot| self.links[slot].next)
    }
}
