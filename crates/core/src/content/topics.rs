/// Sidebar sections of the documentation view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopicGroup {
    DataStructures,
    Algorithms,
    Concepts,
}

impl TopicGroup {
    pub const ALL: [TopicGroup; 3] = [
        TopicGroup::DataStructures,
        TopicGroup::Algorithms,
        TopicGroup::Concepts,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TopicGroup::DataStructures => "Data Structures",
            TopicGroup::Algorithms => "Algorithms",
            TopicGroup::Concepts => "Concepts",
        }
    }

    #[must_use]
    pub fn topics(self) -> impl Iterator<Item = TopicId> {
        TopicId::ALL.into_iter().filter(move |topic| topic.group() == self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TopicId {
    #[default]
    Arrays,
    LinkedLists,
    Stacks,
    Queues,
    HashTables,
    Trees,
    BinarySearchTrees,
    Heaps,
    Graphs,
    Sorting,
    Searching,
    Recursion,
    DynamicProgramming,
    Greedy,
    Backtracking,
    DivideAndConquer,
    Complexity,
    AsymptoticNotation,
    ProblemSolving,
    Optimization,
}

impl TopicId {
    pub const ALL: [TopicId; 20] = [
        TopicId::Arrays,
        TopicId::LinkedLists,
        TopicId::Stacks,
        TopicId::Queues,
        TopicId::HashTables,
        TopicId::Trees,
        TopicId::BinarySearchTrees,
        TopicId::Heaps,
        TopicId::Graphs,
        TopicId::Sorting,
        TopicId::Searching,
        TopicId::Recursion,
        TopicId::DynamicProgramming,
        TopicId::Greedy,
        TopicId::Backtracking,
        TopicId::DivideAndConquer,
        TopicId::Complexity,
        TopicId::AsymptoticNotation,
        TopicId::ProblemSolving,
        TopicId::Optimization,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            TopicId::Arrays => "arrays",
            TopicId::LinkedLists => "linked-lists",
            TopicId::Stacks => "stacks",
            TopicId::Queues => "queues",
            TopicId::HashTables => "hash-tables",
            TopicId::Trees => "trees",
            TopicId::BinarySearchTrees => "binary-search-trees",
            TopicId::Heaps => "heaps",
            TopicId::Graphs => "graphs",
            TopicId::Sorting => "sorting",
            TopicId::Searching => "searching",
            TopicId::Recursion => "recursion",
            TopicId::DynamicProgramming => "dynamic-programming",
            TopicId::Greedy => "greedy",
            TopicId::Backtracking => "backtracking",
            TopicId::DivideAndConquer => "divide-and-conquer",
            TopicId::Complexity => "complexity",
            TopicId::AsymptoticNotation => "asymptotic-notation",
            TopicId::ProblemSolving => "problem-solving",
            TopicId::Optimization => "optimization",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TopicId::Arrays => "Arrays",
            TopicId::LinkedLists => "Linked Lists",
            TopicId::Stacks => "Stacks",
            TopicId::Queues => "Queues",
            TopicId::HashTables => "Hash Tables",
            TopicId::Trees => "Trees",
            TopicId::BinarySearchTrees => "Binary Search Trees",
            TopicId::Heaps => "Heaps",
            TopicId::Graphs => "Graphs",
            TopicId::Sorting => "Sorting Algorithms",
            TopicId::Searching => "Searching Algorithms",
            TopicId::Recursion => "Recursion",
            TopicId::DynamicProgramming => "Dynamic Programming",
            TopicId::Greedy => "Greedy Algorithms",
            TopicId::Backtracking => "Backtracking",
            TopicId::DivideAndConquer => "Divide and Conquer",
            TopicId::Complexity => "Time & Space Complexity",
            TopicId::AsymptoticNotation => "Asymptotic Notation",
            TopicId::ProblemSolving => "Problem Solving Strategies",
            TopicId::Optimization => "Optimization Techniques",
        }
    }

    #[must_use]
    pub fn group(self) -> TopicGroup {
        match self {
            TopicId::Arrays
            | TopicId::LinkedLists
            | TopicId::Stacks
            | TopicId::Queues
            | TopicId::HashTables
            | TopicId::Trees
            | TopicId::BinarySearchTrees
            | TopicId::Heaps
            | TopicId::Graphs => TopicGroup::DataStructures,
            TopicId::Sorting
            | TopicId::Searching
            | TopicId::Recursion
            | TopicId::DynamicProgramming
            | TopicId::Greedy
            | TopicId::Backtracking
            | TopicId::DivideAndConquer => TopicGroup::Algorithms,
            TopicId::Complexity
            | TopicId::AsymptoticNotation
            | TopicId::ProblemSolving
            | TopicId::Optimization => TopicGroup::Concepts,
        }
    }
}

/// Markdown body for a documentation topic.
#[must_use]
pub fn topic_content(topic: TopicId) -> String {
    let body = match topic {
        TopicId::Arrays => ARRAYS,
        TopicId::LinkedLists => LINKED_LISTS,
        TopicId::Stacks => STACKS,
        TopicId::Queues => QUEUES,
        TopicId::HashTables => HASH_TABLES,
        TopicId::Trees => TREES,
        TopicId::Graphs => GRAPHS,
        _ => PENDING,
    };
    format!("# {}\n\n{body}", topic.label())
}

const PENDING: &str = "Content for this topic is being developed. Check back soon!\n";

const ARRAYS: &str = "\
An array is a collection of items stored at contiguous memory locations, all of the \
same type.

## Key Characteristics

- **Random Access:** any element is reachable by index in O(1)
- **Fixed Size:** many languages fix the length at creation; dynamic arrays grow by \
reallocating
- **Homogeneous Elements:** every element shares one type

## Complexity

| Operation | Time |
|-----------|------|
| Access    | O(1) |
| Search    | O(n) |
| Insert    | O(n) |
| Delete    | O(n) |

## Common Techniques

Two pointers, sliding windows, and prefix sums turn many quadratic array problems \
into linear ones.
";

const LINKED_LISTS: &str = "\
A linked list stores elements in nodes, each holding a value and a reference to the \
next node. Nodes need not be contiguous in memory.

## Variants

- **Singly linked:** each node points to the next
- **Doubly linked:** nodes also point to the previous node
- **Circular:** the last node points back to the head

## Complexity

Insertion and deletion at a known node are O(1); search and indexed access are O(n).

## Common Techniques

Fast and slow pointers detect cycles and find midpoints; a dummy head simplifies \
edge cases when the first node may change.
";

const STACKS: &str = "\
A stack is a last-in, first-out collection. Elements are pushed onto and popped from \
the top.

## Operations

- `push`, `pop` and `peek` all run in O(1)

## Applications

Balancing parentheses, evaluating expressions, undo history, and emulating the call \
stack for iterative depth-first search.
";

const QUEUES: &str = "\
A queue is a first-in, first-out collection. Elements are enqueued at the back and \
dequeued from the front.

## Variants

- **Circular buffer:** fixed storage reused by wrapping indices
- **Deque:** insertion and removal at both ends
- **Priority queue:** removal order decided by priority, usually backed by a heap

## Applications

Breadth-first search, task scheduling, and buffering between producers and consumers.
";

const HASH_TABLES: &str = "\
A hash table maps keys to values by hashing each key to a bucket index.

## Collision Resolution

- **Chaining:** each bucket holds a list of entries
- **Open addressing:** probe for the next free slot

## Complexity

Lookup, insertion and deletion are O(1) on average and O(n) in the worst case. \
Resizing keeps the load factor bounded.
";

const TREES: &str = "\
A tree is a hierarchical structure of nodes connected by edges, with a single root \
and no cycles.

## Terminology

- **Leaf:** a node without children
- **Height:** the longest root-to-leaf path
- **Binary tree:** every node has at most two children

## Traversals

Pre-order, in-order and post-order visit nodes depth first; level-order visits them \
breadth first using a queue.
";

const GRAPHS: &str = "\
A graph is a set of vertices connected by edges, which may be directed or \
undirected, weighted or unweighted.

## Representations

- **Adjacency list:** compact for sparse graphs
- **Adjacency matrix:** O(1) edge checks for dense graphs

## Algorithms

Breadth-first and depth-first search explore a graph; Dijkstra, Bellman-Ford and \
Floyd-Warshall compute shortest paths; Prim and Kruskal build minimum spanning trees.
";
