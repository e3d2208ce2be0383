//! The embedded course catalog
//!
//! Hand-authored course content, built once and shared for the lifetime of
//! the process. Content is markdown displayed as plain text; quick-check
//! questions are attached to the topics that carry one.

use once_cell::sync::Lazy;

use super::model::{Course, Module, QuizOption, QuizQuestion, Topic};

/// The built-in course
pub static COURSE: Lazy<Course> = Lazy::new(python_fundamentals);

fn python_fundamentals() -> Course {
    let mut course = Course::new(
        "python-fundamentals",
        "Python Fundamentals",
        "A comprehensive course covering Python programming from basics to advanced \
         concepts. Perfect for beginners and intermediate programmers looking to \
         master Python.",
    );

    course.modules.push(getting_started());
    course.modules.push(control_flow());
    course.modules.push(functions_and_modules());

    course
}

fn getting_started() -> Module {
    let mut module = Module::new(
        "module-1",
        1,
        "Getting Started with Python",
        "Learn the fundamentals of Python programming, including setup, syntax, and \
         basic concepts.",
    );

    module.topics.push(
        Topic::new(
            "intro-to-python",
            1,
            "Introduction to Python",
            r#"# Introduction to Python

Welcome to the world of Python programming! In this introduction you'll learn
about Python's history, its key features, and why it has become one of the most
popular programming languages in the world.

---

## A Brief History

Python is a high-level, interpreted, object-oriented language conceived in the
late 1980s by **Guido van Rossum** at CWI in the Netherlands. The name wasn't
inspired by the snake but by the British comedy group **Monty Python's Flying
Circus** - Guido wanted the language to be fun to use.

| Year | Milestone |
|------|-----------|
| 1989 | Guido van Rossum begins working on Python |
| 1991 | First public release (version 0.9.0) |
| 2000 | Python 2.0 released with list comprehensions |
| 2008 | Python 3.0 released with major improvements |
| 2020 | Python 2 reaches end of life |

## Why Python?

### Easy to Learn and Read

Python's syntax mirrors natural English:

```python
if user.is_authenticated and user.has_permission("edit"):
    document.save()
```

### Dynamic Typing

Variables need no declaration - you simply assign:

```python
x = 10
name = "Ada"
```

### Indentation Defines Blocks

Python uses indentation (typically 4 spaces) instead of braces to define code
blocks, which enforces consistent, readable formatting:

```python
def greet(name):
    if name:
        print(f"Hello, {name}!")
```

### Batteries Included

The standard library handles everything from JSON to HTTP servers:

```python
import json
import datetime
import sqlite3
```
"#,
        )
        .with_quick_check(vec![
            QuizQuestion::new(
                "q1-1",
                "Who created Python and when?",
                vec![
                    QuizOption::new("a", "James Gosling in 1995", false),
                    QuizOption::new("b", "Guido van Rossum in the late 1980s", true),
                    QuizOption::new("c", "Dennis Ritchie in 1972", false),
                    QuizOption::new("d", "Bjarne Stroustrup in 1983", false),
                ],
                "Python was created by Guido van Rossum at the National Research \
                 Institute for Mathematics and Computer Science in the Netherlands in \
                 the late 1980s.",
            ),
            QuizQuestion::new(
                "q1-2",
                "What is the correct way to define a variable in Python?",
                vec![
                    QuizOption::new("a", "int x = 10;", false),
                    QuizOption::new("b", "var x = 10", false),
                    QuizOption::new("c", "x = 10", true),
                    QuizOption::new("d", "let x = 10", false),
                ],
                "Python uses dynamic typing, so you simply assign a value with the = \
                 operator. No type declaration or keywords like 'var' or 'let' are \
                 needed.",
            ),
            QuizQuestion::new(
                "q1-3",
                "How does Python define code blocks?",
                vec![
                    QuizOption::new("a", "Using curly braces { }", false),
                    QuizOption::new("b", "Using indentation (whitespace)", true),
                    QuizOption::new("c", "Using begin/end keywords", false),
                    QuizOption::new("d", "Using parentheses ( )", false),
                ],
                "Python uniquely uses indentation (typically 4 spaces) to define code \
                 blocks instead of braces or keywords. This enforces readable, \
                 consistent code formatting.",
            ),
        ]),
    );

    module.topics.push(
        Topic::new(
            "built-in-functions",
            2,
            "Built-in Functions",
            r#"# Built-in Functions

Python ships with dozens of built-in functions that are always available
without an import.

## The Essentials

```python
print("Hello")          # write to stdout
len([1, 2, 3])          # 3
type(42)                # <class 'int'>
range(5)                # 0, 1, 2, 3, 4
input("Name? ")         # read a line from stdin
```

## Conversions

```python
int("42")       # 42
float("3.5")    # 3.5
str(10)         # "10"
list("abc")     # ['a', 'b', 'c']
```

## Numeric Helpers

```python
abs(-7)             # 7
round(3.456, 2)     # 3.46
min(4, 1, 9)        # 1
max([2, 8, 5])      # 8
sum([1, 2, 3])      # 6
divmod(17, 5)       # (3, 2) - quotient and remainder
```

Floor division with `//` rounds toward negative infinity:

```python
17 // 5     # 3
17 % 5      # 2
```

## Identity vs Equality

`==` compares values; `is` compares object identity:

```python
a = [1, 2]
b = [1, 2]
a == b      # True  - same value
a is b      # False - different objects
```
"#,
        )
        .with_quick_check(vec![
            QuizQuestion::new(
                "q2-1",
                "What is the result of 17 // 5 in Python?",
                vec![
                    QuizOption::new("a", "3.4", false),
                    QuizOption::new("b", "3", true),
                    QuizOption::new("c", "4", false),
                    QuizOption::new("d", "2", false),
                ],
                "The // operator performs floor division, which divides and rounds \
                 down to the nearest integer. 17 / 5 = 3.4, rounded down is 3.",
            ),
            QuizQuestion::new(
                "q2-2",
                "What is the difference between 'is' and '==' in Python?",
                vec![
                    QuizOption::new("a", "They are identical", false),
                    QuizOption::new("b", "'is' checks value, '==' checks identity", false),
                    QuizOption::new(
                        "c",
                        "'is' checks identity (same object), '==' checks equality (same value)",
                        true,
                    ),
                    QuizOption::new("d", "'is' is faster than '=='", false),
                ],
                "The 'is' operator checks if two variables point to the same object in \
                 memory, while '==' checks if they have the same value. Two lists with \
                 the same values are == but not 'is'.",
            ),
        ]),
    );

    module.topics.push(Topic::new(
        "operators",
        3,
        "Operators",
        r#"# Operators

## Arithmetic

```python
7 + 3       # 10
7 - 3       # 4
7 * 3       # 21
7 / 3       # 2.333...  (always a float)
7 // 3      # 2         (floor division)
7 % 3       # 1         (modulo)
2 ** 10     # 1024      (exponent)
```

## Comparison and Logic

```python
3 < 5 and 5 < 8     # True
not (1 == 1)        # False
x = 5
1 < x < 10          # True - comparisons chain!
```

## Membership

```python
"py" in "python"        # True
3 in [1, 2, 3]          # True
"k" not in "dojo"       # True
```

## Augmented Assignment

```python
count = 0
count += 1
total *= 2
```

Python has no `++` or `--` operators; use `+= 1` and `-= 1`.
"#,
    ));

    module
}

fn control_flow() -> Module {
    let mut module = Module::new(
        "module-2",
        2,
        "Control Flow & Data Structures",
        "Master conditional logic, loops, and Python's core collection types.",
    );

    module.topics.push(
        Topic::new(
            "control-statements",
            1,
            "Control Statements",
            r#"# Control Statements

## Conditionals

```python
if score >= 90:
    grade = "A"
elif score >= 80:
    grade = "B"
else:
    grade = "C"
```

## Loops

```python
for item in ["a", "b", "c"]:
    print(item)

for i in range(3):          # 0, 1, 2
    print(i)

while attempts < 3:
    attempts += 1
```

## Loop Control

- `break` exits the loop entirely
- `continue` skips to the next iteration
- `else` on a loop runs only if the loop finished without `break`

```python
for n in numbers:
    if n < 0:
        break
else:
    print("all numbers were non-negative")
```

## enumerate and zip

```python
for index, value in enumerate(names, start=1):
    print(index, value)

for name, score in zip(names, scores):
    print(name, score)
```
"#,
        )
        .with_quick_check(vec![
            QuizQuestion::new(
                "q4-1",
                "What does the 'break' statement do inside a loop?",
                vec![
                    QuizOption::new("a", "Skips to the next iteration", false),
                    QuizOption::new("b", "Exits the loop entirely", true),
                    QuizOption::new("c", "Pauses the loop", false),
                    QuizOption::new("d", "Restarts the loop from the beginning", false),
                ],
                "break immediately terminates the enclosing loop. continue is the \
                 statement that skips to the next iteration.",
            ),
            QuizQuestion::new(
                "q4-2",
                "When does a for-loop's else clause execute?",
                vec![
                    QuizOption::new("a", "When the loop body raises an exception", false),
                    QuizOption::new("b", "After every iteration", false),
                    QuizOption::new("c", "Only if the loop completed without hitting break", true),
                    QuizOption::new("d", "Never - loops cannot have else clauses", false),
                ],
                "A loop's else clause runs when the loop exhausts its iterable without \
                 being terminated by break. It is commonly used for search loops.",
            ),
        ]),
    );

    module.topics.push(
        Topic::new(
            "data-types",
            2,
            "Data Types and Methods",
            r#"# Data Types and Methods

## Lists - ordered, mutable

```python
langs = ["python", "rust"]
langs.append("go")
langs[0]            # "python"
langs[-1]           # "go"
langs[1:]           # ["rust", "go"]
```

## Tuples - ordered, immutable

```python
point = (3, 4)
x, y = point        # unpacking
```

## Dictionaries - key/value

```python
ages = {"ada": 36, "alan": 41}
ages["ada"]             # 36
ages.get("grace", 0)    # 0 - default on miss
ages.keys()
ages.items()
```

## Sets - unique, unordered

```python
seen = {1, 2, 3}
seen.add(2)         # no-op, already present
2 in seen           # True - O(1) membership
```

## Strings are immutable

Every "mutating" string method returns a new string:

```python
s = "dojo"
s.upper()       # "DOJO"; s is unchanged
",".join(["a", "b"])    # "a,b"
"a,b".split(",")        # ["a", "b"]
```

## Comprehensions

```python
squares = [n * n for n in range(10) if n % 2 == 0]
index = {name: i for i, name in enumerate(names)}
```
"#,
        )
        .with_quick_check(vec![QuizQuestion::new(
            "q5-1",
            "Which Python collection type is ordered and immutable?",
            vec![
                QuizOption::new("a", "list", false),
                QuizOption::new("b", "dict", false),
                QuizOption::new("c", "set", false),
                QuizOption::new("d", "tuple", true),
            ],
            "Tuples preserve insertion order like lists but cannot be modified after \
             creation, which also makes them usable as dictionary keys.",
        )]),
    );

    module
}

fn functions_and_modules() -> Module {
    let mut module = Module::new(
        "module-3",
        3,
        "Functions & Modules",
        "Write reusable functions and organize code into modules and packages.",
    );

    module.topics.push(
        Topic::new(
            "functions",
            1,
            "Functions",
            r#"# Functions

## Defining and Calling

```python
def greet(name, greeting="Hello"):
    """Return a greeting for name."""
    return f"{greeting}, {name}!"

greet("Ada")                    # "Hello, Ada!"
greet("Alan", greeting="Hi")    # "Hi, Alan!"
```

## Arguments

- Positional arguments are matched by order
- Keyword arguments are matched by name
- `*args` collects extra positional arguments into a tuple
- `**kwargs` collects extra keyword arguments into a dict

```python
def log(message, *tags, **context):
    ...
```

## Default-Argument Pitfall

Defaults are evaluated once, at definition time. Never use a mutable default:

```python
def append_to(item, bucket=None):
    if bucket is None:
        bucket = []
    bucket.append(item)
    return bucket
```

## Lambdas

Small anonymous functions for simple expressions:

```python
sorted(words, key=lambda w: len(w))
```

## Scope

Python resolves names with the LEGB rule: Local, Enclosing, Global, Built-in.
Assigning to a name inside a function makes it local unless declared
`global` or `nonlocal`.
"#,
        )
        .with_quick_check(vec![
            QuizQuestion::new(
                "q6-1",
                "Why should you avoid mutable default arguments like def f(x, items=[])?",
                vec![
                    QuizOption::new("a", "They are a syntax error", false),
                    QuizOption::new(
                        "b",
                        "The default is evaluated once and shared across all calls",
                        true,
                    ),
                    QuizOption::new("c", "They make the function slower", false),
                    QuizOption::new("d", "Lists cannot be default arguments", false),
                ],
                "Default values are evaluated once at function definition, so a mutable \
                 default like a list is shared between calls and accumulates state. Use \
                 None as the sentinel and create the list inside the function.",
            ),
            QuizQuestion::new(
                "q6-2",
                "What does *args collect in a function signature?",
                vec![
                    QuizOption::new("a", "Extra keyword arguments, as a dict", false),
                    QuizOption::new("b", "Extra positional arguments, as a tuple", true),
                    QuizOption::new("c", "All arguments, as a list", false),
                    QuizOption::new("d", "Pointers to the arguments", false),
                ],
                "*args gathers any extra positional arguments into a tuple; **kwargs \
                 gathers extra keyword arguments into a dict.",
            ),
        ]),
    );

    module.topics.push(Topic::new(
        "modules-and-packages",
        2,
        "Modules and Packages",
        r#"# Modules and Packages

## Importing

```python
import math
math.sqrt(16)               # 4.0

from pathlib import Path
from collections import Counter as C
```

## Every File Is a Module

A file `tools.py` is importable as `import tools`. A directory with an
`__init__.py` is a package:

```
project/
    app/
        __init__.py
        db.py
        web.py
```

```python
from app.db import connect
```

## The Main Guard

Code under the guard runs only when the file is executed directly, not when
it is imported:

```python
def main():
    ...

if __name__ == "__main__":
    main()
```

## Where Imports Come From

Python searches `sys.path`: the script's directory, installed site-packages,
and anything on `PYTHONPATH`. Third-party packages are installed with pip:

```
pip install requests
```
"#,
    ));

    module
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_well_formed() {
        assert!(COURSE.validate().is_empty());
    }

    #[test]
    fn catalog_has_content() {
        assert!(COURSE.topic_count() >= 7);
        assert!(COURSE.modules.len() >= 3);
        for module in &COURSE.modules {
            assert!(!module.topics.is_empty());
        }
    }

    #[test]
    fn module_numbers_are_unique_and_ascending() {
        let numbers: Vec<usize> = COURSE.modules.iter().map(|m| m.number).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn topic_numbers_are_module_local() {
        for module in &COURSE.modules {
            for (i, topic) in module.topics.iter().enumerate() {
                assert_eq!(topic.number, i + 1, "topic {} in {}", topic.id, module.id);
            }
        }
    }

    #[test]
    fn some_topics_carry_quick_checks() {
        let with_quiz =
            COURSE.modules.iter().flat_map(|m| &m.topics).filter(|t| t.has_quick_check()).count();
        assert!(with_quiz >= 4);
    }
}
