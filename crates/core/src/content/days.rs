//! Static per-day curriculum tables and the lookups derived from them.

use crate::content::Difficulty;
use crate::model::Day;

/// Title, summary and difficulty for one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

#[must_use]
pub fn day_metadata(day: Day) -> DayMetadata {
    DayMetadata {
        title: DAY_TITLES[day.index()],
        description: DAY_DESCRIPTIONS[day.index()],
        difficulty: day_difficulty(day),
    }
}

#[must_use]
pub fn day_difficulty(day: Day) -> Difficulty {
    match day.value() {
        0..=30 => Difficulty::Easy,
        31..=60 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// Last word of the day's title, used to phrase generated problems and links.
#[must_use]
pub fn title_subject(day: Day) -> &'static str {
    let title = DAY_TITLES[day.index()];
    title.rsplit(' ').next().unwrap_or(title)
}

#[must_use]
pub fn topic_tags(day: Day) -> &'static [&'static str] {
    match day.value() {
        0..=8 => &["Arrays", "Time Complexity"],
        9..=16 => &["Linked Lists", "Pointers"],
        17..=24 => &["Stacks", "Queues", "Hash Tables"],
        25..=32 => &["Trees", "Binary Search Trees"],
        33..=40 => &["Heaps", "Priority Queues"],
        41..=48 => &["Graphs", "Graph Algorithms"],
        49..=56 => &["Sorting", "Searching"],
        57..=64 => &["Dynamic Programming", "Memoization"],
        65..=72 => &["Greedy Algorithms", "Divide & Conquer"],
        73..=80 => &["Backtracking", "Branch & Bound"],
        _ => &["Advanced Topics", "Interview Preparation"],
    }
}

#[must_use]
pub fn learning_objectives(_day: Day) -> &'static [&'static str] {
    &[
        "Understand the theoretical concepts related to today's topic",
        "Implement the data structure or algorithm in your preferred language",
        "Analyze the time and space complexity of the implementation",
        "Solve practice problems using the concepts learned",
    ]
}

/// Theory section as markdown.
#[must_use]
pub fn day_theory(day: Day) -> String {
    if day == Day::FIRST {
        return DAY_ONE_THEORY.to_string();
    }
    format!(
        "Theory content for Day {day} will be added soon.\n\n\
         This section will include concepts, explanations, diagrams, and theoretical \
         background on {}.\n",
        DAY_TITLES[day.index()]
    )
}

/// Languages offered in the code example tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodeLanguage {
    #[default]
    JavaScript,
    Python,
    Java,
    Cpp,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 4] = [
        CodeLanguage::JavaScript,
        CodeLanguage::Python,
        CodeLanguage::Java,
        CodeLanguage::Cpp,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "JavaScript",
            CodeLanguage::Python => "Python",
            CodeLanguage::Java => "Java",
            CodeLanguage::Cpp => "C++",
        }
    }
}

#[must_use]
pub fn code_example(day: Day, language: CodeLanguage) -> String {
    match language {
        CodeLanguage::JavaScript if day == Day::FIRST => DAY_ONE_JAVASCRIPT.to_string(),
        CodeLanguage::JavaScript => format!("// Code example for Day {day} will be added soon."),
        CodeLanguage::Python => format!(
            "# Sample Python code example for Day {day}\n# This would be replaced with actual content"
        ),
        CodeLanguage::Java => format!(
            "// Sample Java code example for Day {day}\n// This would be replaced with actual content"
        ),
        CodeLanguage::Cpp => format!(
            "// Sample C++ code example for Day {day}\n// This would be replaced with actual content"
        ),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeProblem {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub url: String,
}

/// Two generated problems per day, plus a hard one after day 30.
#[must_use]
pub fn day_problems(day: Day) -> Vec<PracticeProblem> {
    let subject = title_subject(day);
    let slug = subject.to_lowercase();
    let mut problems = vec![
        PracticeProblem {
            title: format!("Problem 1: Basic {subject} Operations"),
            description: format!("Implement basic operations for {subject}."),
            difficulty: Difficulty::Easy,
            url: "https://leetcode.com/problems/two-sum/".to_string(),
        },
        PracticeProblem {
            title: format!("Problem 2: Intermediate {subject} Challenge"),
            description: format!("Solve a real-world problem using {subject}."),
            difficulty: Difficulty::Medium,
            url: format!("https://leetcode.com/problems/two-sum/{slug}"),
        },
    ];
    if day.value() > 30 {
        problems.push(PracticeProblem {
            title: format!("Problem 3: Advanced {subject} Problem"),
            description:
                "Solve a complex problem that requires optimization and deep understanding."
                    .to_string(),
            difficulty: Difficulty::Hard,
            url: format!("https://leetcode.com/problems/two-sum/{slug}"),
        });
    }
    problems
}

#[must_use]
pub fn related_lectures(day: Day) -> Vec<String> {
    let subject = title_subject(day);
    vec![
        format!("Introduction to {subject}"),
        format!("Advanced {subject} Techniques"),
        format!("{subject} in the Real World"),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalResource {
    pub label: String,
    pub url: &'static str,
}

#[must_use]
pub fn external_resources(day: Day) -> Vec<ExternalResource> {
    let title = DAY_TITLES[day.index()];
    let subject = title_subject(day);
    vec![
        ExternalResource {
            label: format!("GeeksforGeeks: {title}"),
            url: "https://www.geeksforgeeks.org/data-structures/",
        },
        ExternalResource {
            label: format!("Visualizing {subject}"),
            url: "https://visualgo.net/en",
        },
        ExternalResource {
            label: format!("LeetCode Problems on {subject}"),
            url: "https://leetcode.com/problemset/",
        },
    ]
}

const DAY_ONE_THEORY: &str = "\
## Introduction to Arrays

An array is a collection of items stored at contiguous memory locations. Storing \
items of the same type together makes the position of each element a simple offset \
from the base address of the array.

### Why Arrays?

Arrays allow random access to elements and have good cache locality, which makes a \
large difference in practice.

### Time Complexity

Time complexity estimates how the running time of an algorithm grows by counting the \
elementary operations it performs.

### Big O Notation

Big O notation classifies algorithms by how their run time or space requirements grow \
as the input size grows.

#### Common Time Complexities for Arrays

- **Access:** O(1), any element by index
- **Search:** O(n), linear scan when unsorted
- **Insertion:** O(n), elements may need shifting
- **Deletion:** O(n), elements may need shifting
";

const DAY_ONE_JAVASCRIPT: &str = r#"// Creating an array
const array = [1, 2, 3, 4, 5];

// Accessing elements
console.log("First element:", array[0]); // 1
console.log("Last element:", array[array.length - 1]); // 5

// O(n): check each element in the worst case
function findElement(arr, target) {
  for (let i = 0; i < arr.length; i++) {
    if (arr[i] === target) {
      return i;
    }
  }
  return -1;
}

// O(n): elements after the index shift right
function insertAtIndex(arr, index, value) {
  return [...arr.slice(0, index), value, ...arr.slice(index)];
}

// O(n): elements after the index shift left
function removeAtIndex(arr, index) {
  return [...arr.slice(0, index), ...arr.slice(index + 1)];
}"#;

const DAY_TITLES: [&str; 90] = [
    "Introduction to Arrays and Time Complexity",
    "Array Operations and Techniques",
    "Two Pointer Technique with Arrays",
    "Prefix Sum and Sliding Window",
    "Introduction to Sorting Algorithms",
    "Binary Search",
    "Strings and String Manipulation",
    "Weekly Review and Practice Problems",
    "Introduction to Linked Lists",
    "Linked List Operations",
    "Doubly Linked Lists",
    "Circular Linked Lists",
    "Stacks: Introduction and Implementation",
    "Stack Applications and Problems",
    "Queues: Introduction and Implementation",
    "Weekly Review and Practice Problems",
    "Trees: Introduction and Terminology",
    "Binary Trees",
    "Binary Search Trees",
    "Tree Traversals",
    "Balanced BSTs",
    "Heaps and Priority Queues",
    "Trie Data Structure",
    "Weekly Review and Practice Problems",
    "Graphs: Introduction and Representation",
    "Graph Traversals: BFS and DFS",
    "Shortest Path Algorithms",
    "Minimum Spanning Trees",
    "Topological Sorting",
    "Advanced Graph Algorithms",
    "Disjoint Set Union (DSU)",
    "Weekly Review and Practice Problems",
    "Hashing: Introduction and Implementation",
    "Hash Maps and Hash Sets",
    "Collision Resolution Techniques",
    "Dynamic Programming: Introduction",
    "DP: Memoization Technique",
    "DP: Tabulation Technique",
    "DP: Common Patterns",
    "Weekly Review and Practice Problems",
    "Greedy Algorithms: Introduction",
    "Greedy Algorithms: Applications",
    "Divide and Conquer: Introduction",
    "Divide and Conquer: Applications",
    "Backtracking: Introduction",
    "Backtracking: Applications",
    "Bit Manipulation: Basics",
    "Weekly Review and Practice Problems",
    "Segment Trees",
    "Fenwick Trees (Binary Indexed Trees)",
    "Advanced Sorting Algorithms",
    "String Algorithms: KMP",
    "String Algorithms: Rabin-Karp",
    "String Algorithms: Z-algorithm",
    "Advanced String Concepts",
    "Weekly Review and Practice Problems",
    "Mathematical Algorithms: GCD and LCM",
    "Mathematical Algorithms: Prime Numbers",
    "Mathematical Algorithms: Modular Arithmetic",
    "Graph Algorithms: Network Flow",
    "Graph Algorithms: Bipartite Matching",
    "Advanced DP: State Compression",
    "Advanced DP: Tree DP",
    "Weekly Review and Practice Problems",
    "Amortized Analysis",
    "Randomized Algorithms",
    "Computational Geometry: Introduction",
    "Computational Geometry: Line Sweep Algorithms",
    "Advanced Data Structures: Sparse Table",
    "Advanced Data Structures: Suffix Arrays",
    "Advanced Data Structures: Suffix Trees",
    "Weekly Review and Practice Problems",
    "System Design: Principles",
    "System Design: Scalability",
    "System Design: Database Choices",
    "System Design: Caching",
    "System Design: Load Balancing",
    "System Design: Microservices",
    "System Design: Case Studies",
    "Weekly Review and Practice Problems",
    "Interview Prep: Problem-Solving Strategies",
    "Interview Prep: Time and Space Complexity Analysis",
    "Interview Prep: Mock Interviews - Arrays & Strings",
    "Interview Prep: Mock Interviews - Linked Lists & Trees",
    "Interview Prep: Mock Interviews - Graphs & DP",
    "Interview Prep: System Design Questions",
    "Interview Prep: Behavioral Questions",
    "Final Review and Assessment",
    "DSA Journey Reflection",
    "Next Steps and Advanced Topics",
];

const DAY_DESCRIPTIONS: [&str; 90] = [
    "Learn about array data structure, basic operations, and analyzing their time complexity.",
    "Deep dive into array manipulation techniques including insertion, deletion, and traversal.",
    "Master the two pointer technique to solve array problems efficiently.",
    "Learn prefix sum arrays and sliding window technique for optimizing array operations.",
    "Introduction to basic sorting algorithms: Bubble Sort, Selection Sort, and Insertion Sort.",
    "Master the binary search algorithm and its applications.",
    "Learn string operations, pattern matching, and common string algorithms.",
    "Review week 1 concepts and solve integrated practice problems.",
    "Introduction to linked list data structure and its advantages over arrays.",
    "Implementation of linked list operations: insertion, deletion, and traversal.",
    "Learn doubly linked list implementation and operations.",
    "Understand circular linked lists and their applications.",
    "Introduction to stacks and their array/linked list implementations.",
    "Explore common stack applications like balancing parentheses and function calls.",
    "Introduction to queues and their array/linked list implementations.",
    "Review week 2 concepts and solve linked data structure problems.",
    "Learn tree terminology, properties, and basic operations.",
    "Understand binary tree structure, properties, and implementation.",
    "Deep dive into binary search trees and their operations.",
    "Master tree traversal techniques: in-order, pre-order, post-order, and level-order.",
    "Learn about AVL trees and Red-Black trees for self-balancing.",
    "Understand heap data structure and priority queue implementation.",
    "Learn trie data structure for efficient string operations.",
    "Review week 3 concepts and solve tree and heap problems.",
    "Introduction to graph theory, terminology, and representation methods.",
    "Master graph traversal algorithms: breadth-first search and depth-first search.",
    "Learn Dijkstra's and Bellman-Ford algorithms for shortest paths.",
    "Understand Prim's and Kruskal's algorithms for minimum spanning trees.",
    "Learn topological sorting algorithms for directed acyclic graphs.",
    "Explore advanced graph algorithms like Floyd-Warshall and Johnson's.",
    "Learn disjoint set union data structure and its applications.",
    "Review week 4 concepts and solve graph algorithm problems.",
    "Introduction to hashing concepts and hash function properties.",
    "Learn hash map and hash set implementations and operations.",
    "Explore collision resolution techniques: chaining and open addressing.",
    "Introduction to dynamic programming and its principles.",
    "Master top-down DP approach with memoization.",
    "Learn bottom-up DP approach with tabulation.",
    "Explore common DP patterns like knapsack, LCS, and LIS.",
    "Review week 5 concepts and solve DP problems.",
    "Introduction to greedy algorithms and their optimal substructure.",
    "Apply greedy algorithms to problems like activity selection and Huffman coding.",
    "Learn divide and conquer paradigm and its approach.",
    "Apply divide and conquer to problems like merge sort and quick sort.",
    "Introduction to backtracking algorithms and constraints.",
    "Apply backtracking to problems like N-Queens and sudoku solver.",
    "Learn bit manipulation operations and applications.",
    "Review week 6 concepts and solve algorithm paradigm problems.",
    "Learn segment tree data structure for range queries.",
    "Understand Fenwick tree implementation for prefix sums.",
    "Explore advanced sorting algorithms like merge sort, quick sort, and radix sort.",
    "Learn Knuth-Morris-Pratt algorithm for pattern matching.",
    "Understand Rabin-Karp algorithm for string matching.",
    "Master Z-algorithm for pattern matching.",
    "Explore suffix-based string data structures and algorithms.",
    "Review week 7 concepts and solve advanced data structure problems.",
    "Learn efficient algorithms for GCD and LCM calculations.",
    "Explore prime number algorithms like Sieve of Eratosthenes.",
    "Master modular arithmetic techniques for large numbers.",
    "Learn network flow algorithms like Ford-Fulkerson and Edmonds-Karp.",
    "Understand bipartite matching algorithms and applications.",
    "Master DP with bit state compression techniques.",
    "Learn dynamic programming approaches for tree problems.",
    "Review week 8 concepts and solve advanced algorithm problems.",
    "Understand amortized analysis for algorithm performance.",
    "Learn randomized algorithms and their probabilistic analysis.",
    "Introduction to computational geometry concepts.",
    "Master line sweep algorithms for geometric problems.",
    "Learn sparse table structure for efficient range queries.",
    "Understand suffix array construction and applications.",
    "Learn suffix tree construction and applications.",
    "Review week 9 concepts and solve specialized algorithm problems.",
    "Introduction to system design principles and requirements analysis.",
    "Learn horizontal and vertical scaling techniques.",
    "Understand SQL vs NoSQL database choices and tradeoffs.",
    "Learn caching strategies and implementations.",
    "Understand load balancing techniques and algorithms.",
    "Learn microservices architecture patterns and communication.",
    "Analyze real-world system design case studies.",
    "Review week 10 concepts and solve system design problems.",
    "Master problem-solving frameworks and approaches for interviews.",
    "Deep dive into analyzing and optimizing algorithm complexity.",
    "Practice solving array and string interview problems.",
    "Practice solving linked list and tree interview problems.",
    "Practice solving graph and dynamic programming interview problems.",
    "Practice answering system design interview questions.",
    "Prepare for behavioral interview questions with STAR method.",
    "Comprehensive review of all 90-day journey concepts.",
    "Reflect on progress, achievements, and growth areas.",
    "Explore advanced DSA topics and continuous learning resources.",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: i64) -> Day {
        Day::new(raw).unwrap()
    }

    #[test]
    fn metadata_comes_from_tables() {
        let first = day_metadata(Day::FIRST);
        assert_eq!(first.title, "Introduction to Arrays and Time Complexity");
        assert_eq!(first.difficulty, Difficulty::Easy);

        let last = day_metadata(Day::LAST);
        assert_eq!(last.title, "Next Steps and Advanced Topics");
        assert_eq!(last.difficulty, Difficulty::Hard);
    }

    #[test]
    fn difficulty_follows_thirty_day_blocks() {
        assert_eq!(day_difficulty(day(30)), Difficulty::Easy);
        assert_eq!(day_difficulty(day(31)), Difficulty::Medium);
        assert_eq!(day_difficulty(day(60)), Difficulty::Medium);
        assert_eq!(day_difficulty(day(61)), Difficulty::Hard);
    }

    #[test]
    fn problems_add_hard_entry_after_day_thirty() {
        assert_eq!(day_problems(day(30)).len(), 2);
        let problems = day_problems(day(31));
        assert_eq!(problems.len(), 3);
        assert_eq!(problems[2].difficulty, Difficulty::Hard);
        assert_eq!(problems[0].title, "Problem 1: Basic (DSU) Operations");
    }

    #[test]
    fn subject_is_last_title_word() {
        assert_eq!(title_subject(day(6)), "Search");
        assert_eq!(related_lectures(day(6))[0], "Introduction to Search");
        assert_eq!(external_resources(day(6))[1].label, "Visualizing Search");
    }

    #[test]
    fn code_examples_are_per_language() {
        assert!(code_example(Day::FIRST, CodeLanguage::JavaScript).contains("findElement"));
        assert!(code_example(day(2), CodeLanguage::Python).starts_with("# Sample Python"));
        assert!(code_example(day(2), CodeLanguage::JavaScript).contains("Day 2"));
    }

    #[test]
    fn tags_cover_every_day() {
        assert_eq!(topic_tags(day(8)), ["Arrays", "Time Complexity"]);
        assert_eq!(topic_tags(day(90)), ["Advanced Topics", "Interview Preparation"]);
        assert!(Day::all().all(|d| !topic_tags(d).is_empty()));
    }
}
