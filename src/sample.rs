//! Bundled "Introduction to React" revisions used when no versions have been saved yet

use crate::store::ContentVersion;

const ORIGINAL: &str = r##"# Introduction to React

React is a JavaScript library for building user interfaces. It was created by Facebook and is now maintained by Meta and the community.

## Key Features
- Component-based architecture
- Virtual DOM for better performance
- Declarative programming style
- Strong ecosystem and community

## Getting Started
To start with React, you need to understand:
1. JSX syntax
2. Components and props
3. State management
4. Event handling

React makes it easy to create interactive UIs."##;

const STUDENT_REVISION: &str = r##"# Introduction to React

React is a powerful JavaScript library for building user interfaces. It was created by Facebook in 2013 and is now maintained by Meta and the open-source community.

## Key Features
- Component-based architecture for reusable code
- Virtual DOM for optimal performance
- Declarative programming style
- Strong ecosystem and active community
- Excellent developer tools

## Getting Started
To start with React, you need to understand these core concepts:
1. JSX syntax and how it works
2. Components, props, and composition
3. State management and hooks
4. Event handling and user interactions
5. Component lifecycle

React makes it easy to create interactive and dynamic UIs with minimal effort."##;

const TEACHER_REVIEW: &str = r##"# Introduction to React

React is a powerful JavaScript library for building user interfaces, particularly web applications. It was created by Facebook in 2013 and is now maintained by Meta and the open-source community.

## Key Features
- Component-based architecture for reusable, modular code
- Virtual DOM for optimal performance and efficiency
- Declarative programming style that's easier to debug
- Strong ecosystem and active community support
- Excellent developer tools and debugging capabilities
- Server-side rendering support

## Learning Prerequisites
Before diving into React, ensure you're comfortable with:
- JavaScript ES6+ features
- HTML and CSS fundamentals
- Basic programming concepts

## Getting Started
To start with React, you need to understand these core concepts:
1. JSX syntax and how it differs from HTML
2. Components, props, and composition patterns
3. State management and React hooks
4. Event handling and user interactions
5. Component lifecycle and effects
6. Conditional rendering and lists

React makes it easy to create interactive, dynamic, and maintainable user interfaces with minimal effort while following best practices."##;

pub fn sample_versions() -> Vec<ContentVersion> {
    [
        (
            "1",
            "Introduction to React - Original",
            "AI Assistant",
            "2024-01-15 10:30",
            ORIGINAL,
        ),
        (
            "2",
            "Introduction to React - Student Revision",
            "Student",
            "2024-01-15 14:45",
            STUDENT_REVISION,
        ),
        (
            "3",
            "Introduction to React - Teacher Review",
            "Teacher",
            "2024-01-15 16:20",
            TEACHER_REVIEW,
        ),
    ]
    .into_iter()
    .map(|(id, title, author, timestamp, content)| ContentVersion {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        timestamp: timestamp.to_string(),
        content: content.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{DiffStrategy, diff_texts, summarize};

    #[test]
    fn samples_are_in_chronological_order() {
        let versions = sample_versions();
        assert_eq!(versions.len(), 3);
        assert!(versions.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn original_to_student_revision_diverges_at_line_three() {
        let versions = sample_versions();
        let original = versions[0].lines();
        let revised = versions[1].lines();
        let diff = diff_texts(
            DiffStrategy::CursorWalk,
            &versions[0].content,
            &versions[1].content,
        );
        let summary = summarize(&diff);

        // Once the original runs out, blank lines in the revision still match
        let trailing_blanks = revised[2..].iter().filter(|l| l.is_empty()).count();
        assert_eq!(summary.unchanged, 2 + trailing_blanks);
        assert_eq!(summary.deletions, original.len() - 2);
        assert_eq!(summary.additions, revised.len() - 2 - trailing_blanks);
    }
}
