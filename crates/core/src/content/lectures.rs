use crate::content::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LectureCategory {
    Fundamentals,
    DataStructures,
    Algorithms,
    Advanced,
}

impl LectureCategory {
    pub const ALL: [LectureCategory; 4] = [
        LectureCategory::Fundamentals,
        LectureCategory::DataStructures,
        LectureCategory::Algorithms,
        LectureCategory::Advanced,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LectureCategory::Fundamentals => "Fundamentals",
            LectureCategory::DataStructures => "Data Structures",
            LectureCategory::Algorithms => "Algorithms",
            LectureCategory::Advanced => "Advanced Topics",
        }
    }
}

/// Lecture list filter; `All` is the default when the view opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LectureFilter {
    #[default]
    All,
    Only(LectureCategory),
}

impl LectureFilter {
    #[must_use]
    pub fn matches(self, lecture: &Lecture) -> bool {
        match self {
            LectureFilter::All => true,
            LectureFilter::Only(category) => lecture.category == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LectureFilter::All => "All Lectures",
            LectureFilter::Only(category) => category.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lecture {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub level: Difficulty,
    pub duration_mins: u32,
    pub category: LectureCategory,
}

#[must_use]
pub fn lectures() -> &'static [Lecture] {
    &LECTURES
}

#[must_use]
pub fn lectures_matching(filter: LectureFilter) -> Vec<Lecture> {
    LECTURES
        .iter()
        .copied()
        .filter(|lecture| filter.matches(lecture))
        .collect()
}

const fn lecture(
    id: u32,
    title: &'static str,
    description: &'static str,
    level: Difficulty,
    duration_mins: u32,
    category: LectureCategory,
) -> Lecture {
    Lecture {
        id,
        title,
        description,
        level,
        duration_mins,
        category,
    }
}

use Difficulty::{Easy, Hard, Medium};
use LectureCategory::{Advanced, Algorithms, DataStructures, Fundamentals};

static LECTURES: [Lecture; 12] = [
    lecture(1, "Introduction to Big O Notation",
        "Learn how to analyze algorithm efficiency using Big O notation.", Easy, 15, Fundamentals),
    lecture(2, "Arrays and Array Operations",
        "Deep dive into array data structure and common operations.", Easy, 22, DataStructures),
    lecture(3, "Linked Lists Fundamentals",
        "Understanding singly and doubly linked lists with examples.", Medium, 25, DataStructures),
    lecture(4, "Stacks and Queues",
        "Implementation and applications of stack and queue data structures.", Medium, 20,
        DataStructures),
    lecture(5, "Hash Tables and Hashing Techniques",
        "Learn how hash tables work and different collision resolution strategies.", Medium, 28,
        DataStructures),
    lecture(6, "Binary Search Trees",
        "Understanding tree data structures with focus on binary search trees.", Hard, 32,
        DataStructures),
    lecture(7, "Graph Representation and Traversals",
        "Learn about adjacency lists, matrices, BFS and DFS traversals.", Hard, 35, DataStructures),
    lecture(8, "Sorting Algorithms: Part 1",
        "Bubble sort, selection sort, and insertion sort explained.", Medium, 27, Algorithms),
    lecture(9, "Sorting Algorithms: Part 2",
        "Merge sort, quick sort, and heap sort with demonstrations.", Hard, 30, Algorithms),
    lecture(10, "Dynamic Programming: Introduction",
        "Learn the fundamentals of dynamic programming with simple examples.", Hard, 40, Advanced),
    lecture(11, "Backtracking Algorithms",
        "Understanding backtracking with problems like N-Queens and Sudoku.", Hard, 38, Advanced),
    lecture(12, "Two Pointer Technique",
        "Solving array problems efficiently using two pointers approach.", Medium, 18, Algorithms),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_keeps_every_lecture() {
        assert_eq!(lectures_matching(LectureFilter::All).len(), lectures().len());
    }

    #[test]
    fn category_filter_narrows() {
        let algorithms = lectures_matching(LectureFilter::Only(LectureCategory::Algorithms));
        let ids: Vec<u32> = algorithms.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![8, 9, 12]);

        let fundamentals = lectures_matching(LectureFilter::Only(LectureCategory::Fundamentals));
        assert_eq!(fundamentals.len(), 1);
    }
}
