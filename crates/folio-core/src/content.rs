//! Built-in portfolio content.
//!
//! Every record set is defined here, in source, and built once when the
//! catalog is constructed. There is no create/update/delete path: records
//! live for the life of the process and the rest of the crate only ever
//! reads them. Ordering in these functions is the canonical display order
//! that the stable filter preserves.

use crate::types::{BlogPost, Project, ProjectStatus, SearchableItem, WorkArea};
use crate::types::{Contact, Education, Experience, ItemKind, Profile, SkillGroup};
use chrono::NaiveDate;

/// Dates here are written literally and known valid; an out-of-range
/// literal falls back to the epoch rather than panicking.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The blog post set, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost::new(
            "1",
            "building-scalable-apis-nodejs",
            "Building Scalable REST APIs with Node.js",
            "A comprehensive guide to designing and implementing production-ready REST APIs \
             using Node.js, Express, and best practices for scalability.",
            date(2024, 1, 15),
            "8 min read",
        )
        .with_tags(&["Backend", "Node.js", "API Design"])
        .featured()
        .with_body(SCALABLE_APIS_BODY),
        BlogPost::new(
            "2",
            "system-design-fundamentals",
            "System Design Fundamentals for Backend Engineers",
            "Understanding the core concepts of system design including load balancing, \
             caching, database sharding, and microservices architecture.",
            date(2024, 1, 10),
            "12 min read",
        )
        .with_tags(&["Systems", "Architecture", "Backend"])
        .featured()
        .with_body(SYSTEM_DESIGN_BODY),
        BlogPost::new(
            "3",
            "docker-containerization-guide",
            "Docker Containerization: From Development to Production",
            "Learn how to containerize your applications with Docker, create optimized \
             multi-stage builds, and deploy to production environments.",
            date(2024, 1, 5),
            "10 min read",
        )
        .with_tags(&["DevOps", "Docker", "Deployment"]),
        BlogPost::new(
            "4",
            "mongodb-optimization-tips",
            "MongoDB Performance Optimization Techniques",
            "Practical tips for optimizing MongoDB performance including indexing \
             strategies, query optimization, and schema design patterns.",
            date(2023, 12, 28),
            "7 min read",
        )
        .with_tags(&["Database", "MongoDB", "Backend"]),
        BlogPost::new(
            "5",
            "aws-deployment-strategies",
            "AWS Deployment Strategies for Node.js Applications",
            "Exploring different AWS deployment options for Node.js apps including EC2, \
             ECS, Lambda, and when to use each approach.",
            date(2023, 12, 20),
            "9 min read",
        )
        .with_tags(&["AWS", "Cloud", "DevOps"]),
        BlogPost::new(
            "6",
            "dsa-interview-preparation",
            "Data Structures & Algorithms: Interview Preparation Guide",
            "A structured approach to preparing for technical interviews with focus on \
             common patterns, problem-solving strategies, and practice tips.",
            date(2023, 12, 15),
            "15 min read",
        )
        .with_tags(&["DSA", "Interviews", "Career"]),
        BlogPost::new(
            "7",
            "rag-systems-explained",
            "Building RAG Systems: A Practical Introduction",
            "Understanding Retrieval Augmented Generation (RAG) systems, their \
             architecture, and how to build intelligent document search engines.",
            date(2023, 12, 10),
            "11 min read",
        )
        .with_tags(&["AI", "LLM", "Backend"]),
    ]
}

/// The project set, in showcase order.
pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "blink-basket",
            "Blink Basket",
            "Full-stack e-commerce platform with real-time inventory management",
            "A comprehensive MERN stack e-commerce solution featuring user authentication, \
             product catalog, shopping cart, payment integration, and admin dashboard for \
             inventory management.",
            ProjectStatus::Working,
            "https://github.com/shikhar0312/blink-basket",
            "Full-Stack",
        )
        .with_tech_stack(&["MongoDB", "Express.js", "React", "Node.js", "Redux", "Stripe"])
        .with_live_url("https://blink-basket.demo.com"),
        Project::new(
            "student-management",
            "Student Management System",
            "Django-based academic management platform with role-based access",
            "A robust student management system built with Django, featuring student \
             enrollment, course management, grade tracking, attendance monitoring, and \
             comprehensive reporting with role-based access control.",
            ProjectStatus::Working,
            "https://github.com/shikhar0312/student-management",
            "Backend",
        )
        .with_tech_stack(&["Django", "PostgreSQL", "Bootstrap", "Celery", "Redis", "Docker"])
        .with_live_url("https://student-mgmt.demo.com"),
        Project::new(
            "ai-doc-search",
            "AI Document Search Engine",
            "RAG-based intelligent document search with semantic understanding",
            "An advanced document search engine utilizing Retrieval Augmented Generation \
             (RAG) for semantic search capabilities. Features document ingestion, vector \
             embeddings, and natural language querying.",
            ProjectStatus::Building,
            "https://github.com/shikhar0312/ai-doc-search",
            "AI/ML",
        )
        .with_tech_stack(&["Python", "LangChain", "OpenAI", "Pinecone", "FastAPI", "React"]),
        Project::new(
            "cloud-deploy-kit",
            "Cloud Deploy Kit",
            "Infrastructure-as-code toolkit for AWS deployments",
            "A comprehensive toolkit for automating AWS infrastructure provisioning and \
             application deployments using Terraform and custom scripts, with CI/CD \
             pipeline integration.",
            ProjectStatus::Building,
            "https://github.com/shikhar0312/cloud-deploy-kit",
            "DevOps",
        )
        .with_tech_stack(&["AWS", "Terraform", "Python", "GitHub Actions", "Docker"]),
        Project::new(
            "api-gateway",
            "Microservices API Gateway",
            "Custom API gateway with rate limiting and caching",
            "A lightweight API gateway implementation featuring request routing, rate \
             limiting, caching, authentication, and monitoring for microservices \
             architectures.",
            ProjectStatus::Working,
            "https://github.com/shikhar0312/api-gateway",
            "Backend",
        )
        .with_tech_stack(&["Node.js", "Redis", "Express", "Docker", "Prometheus"]),
        Project::new(
            "realtime-chat",
            "Real-time Chat Platform",
            "Scalable chat application with WebSocket support",
            "A real-time messaging platform built with Socket.io, featuring private \
             messaging, group chats, file sharing, message encryption, and presence \
             indicators.",
            ProjectStatus::Working,
            "https://github.com/shikhar0312/realtime-chat",
            "Full-Stack",
        )
        .with_tech_stack(&["Node.js", "Socket.io", "React", "MongoDB", "Redis"])
        .with_live_url("https://chat.demo.com"),
    ]
}

/// The navigable page set. These only exist for global search.
pub fn pages() -> Vec<SearchableItem> {
    vec![
        SearchableItem::new("home", "Home", ItemKind::Page, "/", "Portfolio home page"),
        SearchableItem::new(
            "work",
            "Work Experience",
            ItemKind::Page,
            "/work",
            "Engineering expertise",
        ),
        SearchableItem::new(
            "projects",
            "Projects",
            ItemKind::Page,
            "/projects",
            "Featured projects",
        ),
        SearchableItem::new("blogs", "Blog", ItemKind::Page, "/blogs", "Technical articles"),
        SearchableItem::new(
            "resume",
            "Resume",
            ItemKind::Page,
            "/resume",
            "Professional background",
        ),
    ]
}

/// The expertise areas behind the work page, in display order.
pub fn work_areas() -> Vec<WorkArea> {
    vec![
        WorkArea::new(
            "Backend Development",
            "Building robust RESTful APIs and microservices architecture with Node.js, \
             Express, and Django. Implementing authentication, authorization, and data \
             validation layers.",
            &["Node.js", "Express", "Django", "REST APIs", "GraphQL"],
            &[
                "Designed and implemented scalable API architectures",
                "Built authentication systems with JWT and OAuth",
                "Optimized database queries for performance",
            ],
        ),
        WorkArea::new(
            "Database Design",
            "Designing efficient database schemas for both SQL and NoSQL databases. \
             Expertise in data modeling, indexing strategies, and query optimization.",
            &["MongoDB", "PostgreSQL", "MySQL", "Redis", "Mongoose"],
            &[
                "Designed normalized database schemas",
                "Implemented caching strategies with Redis",
                "Managed data migrations and versioning",
            ],
        ),
        WorkArea::new(
            "Cloud Architecture",
            "Deploying and managing applications on AWS cloud infrastructure. \
             Implementing serverless architectures and container orchestration.",
            &["AWS EC2", "S3", "Lambda", "RDS", "CloudFront"],
            &[
                "Configured auto-scaling and load balancing",
                "Implemented CI/CD pipelines",
                "Managed cloud security and IAM policies",
            ],
        ),
        WorkArea::new(
            "Containerization",
            "Containerizing applications with Docker and orchestrating deployments. \
             Building reproducible development environments and production deployments.",
            &["Docker", "Docker Compose", "Kubernetes", "Nginx"],
            &[
                "Created multi-stage Docker builds",
                "Orchestrated microservices deployments",
                "Implemented container security best practices",
            ],
        ),
        WorkArea::new(
            "Full-Stack Development",
            "Building complete web applications from frontend to backend. Specializing \
             in React-based frontends with Node.js/Django backends.",
            &["React", "Next.js", "TypeScript", "Tailwind CSS"],
            &[
                "Developed responsive, accessible UIs",
                "Implemented state management solutions",
                "Built reusable component libraries",
            ],
        ),
        WorkArea::new(
            "System Design",
            "Designing scalable and maintainable software systems. Applying design \
             patterns, SOLID principles, and clean architecture.",
            &["Microservices", "Event-Driven", "CQRS", "DDD"],
            &[
                "Architected distributed systems",
                "Implemented message queues and event buses",
                "Designed for high availability and fault tolerance",
            ],
        ),
    ]
}

/// The resume record.
pub fn profile() -> Profile {
    Profile {
        name: "Shikhar Singh".to_string(),
        title: "Full-Stack Developer".to_string(),
        subtitle: "Backend-Focused | Cloud & System Design".to_string(),
        contact: Contact {
            email: "shikharsingh.work@gmail.com".to_string(),
            location: "India".to_string(),
            linkedin: "linkedin.com/in/shikharsinghwork".to_string(),
            github: "github.com/shikhar0312".to_string(),
        },
        summary: "Passionate Full-Stack Developer with a strong focus on backend \
                  engineering, cloud architecture, and system design. Experienced in \
                  building scalable RESTful APIs, microservices, and cloud-native \
                  applications. Proficient in MERN stack, Django, AWS, and containerized \
                  deployments. Committed to writing clean, maintainable code and \
                  continuously learning new technologies."
            .to_string(),
        skills: vec![
            SkillGroup::new(
                "Languages",
                &["JavaScript", "TypeScript", "Python", "SQL", "HTML/CSS"],
            ),
            SkillGroup::new(
                "Frameworks",
                &["React", "Next.js", "Node.js", "Express", "Django", "FastAPI"],
            ),
            SkillGroup::new("Databases", &["MongoDB", "PostgreSQL", "MySQL", "Redis"]),
            SkillGroup::new(
                "Cloud",
                &["AWS (EC2, S3, Lambda, RDS)", "Docker", "Kubernetes", "CI/CD"],
            ),
            SkillGroup::new("Tools", &["Git", "Postman", "VS Code", "Jira", "Figma"]),
        ],
        experience: vec![Experience {
            title: "Full-Stack Developer".to_string(),
            engagement: "Personal Projects & Freelance".to_string(),
            period: "2023 - Present".to_string(),
            highlights: vec![
                "Designed and developed scalable web applications using MERN stack and Django"
                    .to_string(),
                "Implemented RESTful APIs with authentication, authorization, and data validation"
                    .to_string(),
                "Deployed applications on AWS using EC2, S3, and containerized with Docker"
                    .to_string(),
                "Optimized database queries and implemented caching strategies with Redis"
                    .to_string(),
            ],
        }],
        education: vec![Education {
            degree: "Bachelor of Technology".to_string(),
            field: "Computer Science / Information Technology".to_string(),
            institution: "Dr. A. P. J. Abdul Kalam Technical University, Lucknow".to_string(),
            year: "2020 - 2024".to_string(),
        }],
        certifications: vec![
            "AWS Cloud Practitioner".to_string(),
            "Data Structures & Algorithms Certification".to_string(),
        ],
    }
}

const SCALABLE_APIS_BODY: &str = r#"# Building Scalable REST APIs with Node.js

Building production-ready REST APIs requires careful consideration of architecture, security, and performance. This guide covers the essential patterns and practices for creating APIs that can scale.

## Project Structure

A well-organized project structure is the foundation of maintainable code:

```
src/
├── controllers/    # Request handlers
├── routes/        # API route definitions
├── services/      # Business logic
├── models/        # Data models
├── middleware/    # Custom middleware
├── utils/         # Helper functions
└── config/        # Configuration
```

## Key Principles

### 1. Separation of Concerns

Keep your controllers thin by moving business logic to services. Controllers should only handle request/response flow.

### 2. Error Handling

Implement a centralized error handling middleware to catch and format all errors consistently.

### 3. Input Validation

Always validate incoming data using libraries like Joi or Zod before processing.

### 4. Rate Limiting

Protect your API from abuse with rate limiting using packages like express-rate-limit.

### 5. Caching

Implement caching strategies using Redis to reduce database load and improve response times.

## Conclusion

Building scalable APIs is an iterative process. Start with solid foundations and continuously optimize based on real-world usage patterns.
"#;

const SYSTEM_DESIGN_BODY: &str = r#"# System Design Fundamentals for Backend Engineers

Understanding system design is crucial for building applications that can handle growth and maintain reliability.

## Core Concepts

### Load Balancing

Distribute traffic across multiple servers to ensure no single server becomes a bottleneck.

### Caching

Store frequently accessed data in memory to reduce latency and database load.

### Database Sharding

Horizontally partition data across multiple database instances to handle larger datasets.

### Message Queues

Decouple components using asynchronous communication for better fault tolerance.

## Design Patterns

- **Microservices**: Break down monoliths into smaller, independently deployable services
- **Event-Driven Architecture**: React to events rather than direct API calls
- **CQRS**: Separate read and write operations for optimized performance

## Best Practices

1. Design for failure - assume components will fail
2. Make services stateless where possible
3. Implement health checks and monitoring
4. Document your architecture decisions

## Conclusion

System design is about making trade-offs. Understanding these fundamentals helps you make informed decisions for your specific use case.
"#;
