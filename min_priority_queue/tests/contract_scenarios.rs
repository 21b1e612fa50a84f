use min_priority_queue::{
    DualMapQueue, FloatPriority, IndexedHeapQueue, MinPriorityQueue, QueueError, StdHeapQueue,
    UnsortedArrayQueue,
};

type Priority = FloatPriority;

fn p(value: f64) -> Priority {
    FloatPriority(value)
}

fn removes_in_ascending_order<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    queue.add("a", p(3.0)).unwrap();
    queue.add("b", p(1.0)).unwrap();
    queue.add("c", p(2.0)).unwrap();
    let mut order = Vec::new();
    while let Ok((element, _)) = queue.remove_min() {
        order.push(element);
    }
    assert_eq!(order, ["b", "c", "a"]);
}

fn decreased_priority_becomes_min<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    queue.add("x", p(5.0)).unwrap();
    assert_eq!(queue.change_priority("x", p(0.5)), Ok(p(5.0)));
    queue.add("y", p(1.0)).unwrap();
    assert_eq!(queue.peek_min(), Ok((&"x", &p(0.5))));
}

fn duplicate_add_fails<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    assert_eq!(queue.add("z", p(1.0)), Ok(()));
    assert_eq!(queue.add("z", p(1.0)), Err(QueueError::DuplicateElement));
    assert_eq!(queue.add("z", p(0.0)), Err(QueueError::DuplicateElement));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.get_priority("z"), Ok(&p(1.0)));
}

fn empty_queue_errors<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    assert!(queue.is_empty());
    assert_eq!(queue.remove_min(), Err(QueueError::EmptyQueue));
    assert_eq!(queue.peek_min(), Err(QueueError::EmptyQueue));
    assert_eq!(queue.get_priority("a"), Err(QueueError::NotFound));
    assert_eq!(queue.change_priority("a", p(1.0)), Err(QueueError::NotFound));
    assert_eq!(queue.remove("a"), Err(QueueError::NotFound));
    assert!(!queue.contains("a"));
    assert!(queue.is_empty());
}

fn increased_priority_sinks<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    queue.add("a", p(1.0)).unwrap();
    queue.add("b", p(2.0)).unwrap();
    queue.add("c", p(3.0)).unwrap();
    assert_eq!(queue.change_priority("a", p(10.0)), Ok(p(1.0)));
    assert_eq!(queue.remove_min(), Ok(("b", p(2.0))));
    assert_eq!(queue.remove_min(), Ok(("c", p(3.0))));
    assert_eq!(queue.remove_min(), Ok(("a", p(10.0))));
}

fn change_to_same_priority_is_noop<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    let items = [("e", 4.0), ("b", 1.0), ("d", 3.0), ("a", 0.5), ("c", 2.0)];
    for &(element, priority) in items.iter() {
        queue.add(element, p(priority)).unwrap();
    }
    for &(element, _) in items.iter() {
        let current = *queue.get_priority(element).unwrap();
        assert_eq!(queue.change_priority(element, current), Ok(current));
        assert_eq!(queue.get_priority(element), Ok(&current));
        assert_eq!(queue.len(), items.len());
        assert_eq!(queue.peek_min(), Ok((&"a", &p(0.5))));
    }
    let mut order = Vec::new();
    while let Ok((element, _)) = queue.remove_min() {
        order.push(element);
    }
    assert_eq!(order, ["a", "b", "c", "d", "e"]);
}

fn add_or_change_priority_upserts<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    assert_eq!(queue.add_or_change_priority("a", p(2.0)), None);
    assert_eq!(queue.add_or_change_priority("b", p(3.0)), None);
    assert_eq!(queue.add_or_change_priority("b", p(1.0)), Some(p(3.0)));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek_min(), Ok((&"b", &p(1.0))));
}

fn remove_arbitrary_element<Q: MinPriorityQueue<&'static str, Priority>>(mut queue: Q) {
    for (i, &element) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
        queue.add(element, p(i as f64)).unwrap();
    }
    assert_eq!(queue.remove("a"), Ok(p(0.0)));
    assert_eq!(queue.remove("d"), Ok(p(3.0)));
    assert_eq!(queue.remove("d"), Err(QueueError::NotFound));
    assert!(!queue.contains("a"));
    assert_eq!(queue.len(), 4);
    let mut order = Vec::new();
    while let Ok((element, _)) = queue.remove_min() {
        order.push(element);
    }
    assert_eq!(order, ["b", "c", "e", "f"]);

    queue.add("a", p(1.0)).unwrap();
    queue.clear();
    assert!(queue.is_empty());
    assert!(!queue.contains("a"));
}

macro_rules! contract_tests {
    ($module:ident, $make:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn removes_in_ascending_order() {
                super::removes_in_ascending_order($make);
            }

            #[test]
            fn decreased_priority_becomes_min() {
                super::decreased_priority_becomes_min($make);
            }

            #[test]
            fn duplicate_add_fails() {
                super::duplicate_add_fails($make);
            }

            #[test]
            fn empty_queue_errors() {
                super::empty_queue_errors($make);
            }

            #[test]
            fn increased_priority_sinks() {
                super::increased_priority_sinks($make);
            }

            #[test]
            fn change_to_same_priority_is_noop() {
                super::change_to_same_priority_is_noop($make);
            }

            #[test]
            fn add_or_change_priority_upserts() {
                super::add_or_change_priority_upserts($make);
            }

            #[test]
            fn remove_arbitrary_element() {
                super::remove_arbitrary_element($make);
            }
        }
    };
}

contract_tests!(unsorted_array, UnsortedArrayQueue::new());
contract_tests!(dual_map, DualMapQueue::new());
contract_tests!(indexed_heap, IndexedHeapQueue::new());
contract_tests!(std_heap, StdHeapQueue::new());

#[test]
fn error_messages() {
    assert_eq!(
        QueueError::DuplicateElement.to_string(),
        "Element is already in queue"
    );
    assert_eq!(QueueError::NotFound.to_string(), "Element not found in queue");
    assert_eq!(QueueError::EmptyQueue.to_string(), "Queue is empty");
    let boxed: Box<dyn std::error::Error> = Box::new(QueueError::NotFound);
    assert_eq!(boxed.to_string(), "Element not found in queue");
}
