use crate::models::NewCourse;

/// Sample courses inserted on first setup, nine paths of eight courses each.
#[rustfmt::skip]
pub const CATALOG: &[NewCourse<'static>] = &[
    // Full Stack
    course("Full Stack Course 1", "https://sample-video-url-1.com", "https://sample-thumbnail-url-1.com", "Full Stack", "Introduction to Full Stack Development"),
    course("Full Stack Course 2", "https://sample-video-url-2.com", "https://sample-thumbnail-url-2.com", "Full Stack", "Front-End Basics"),
    course("Full Stack Course 3", "https://sample-video-url-3.com", "https://sample-thumbnail-url-3.com", "Full Stack", "Back-End Fundamentals"),
    course("Full Stack Course 4", "https://sample-video-url-4.com", "https://sample-thumbnail-url-4.com", "Full Stack", "Advanced JavaScript"),
    course("Full Stack Course 5", "https://sample-video-url-5.com", "https://sample-thumbnail-url-5.com", "Full Stack", "Node.js for Beginners"),
    course("Full Stack Course 6", "https://sample-video-url-6.com", "https://sample-thumbnail-url-6.com", "Full Stack", "React.js Introduction"),
    course("Full Stack Course 7", "https://sample-video-url-7.com", "https://sample-thumbnail-url-7.com", "Full Stack", "Database Integration with MongoDB"),
    course("Full Stack Course 8", "https://sample-video-url-8.com", "https://sample-thumbnail-url-8.com", "Full Stack", "Building RESTful APIs"),

    // DSA
    course("DSA Course 1", "https://sample-video-url-9.com", "https://sample-thumbnail-url-9.com", "DSA", "Introduction to Data Structures and Algorithms"),
    course("DSA Course 2", "https://sample-video-url-10.com", "https://sample-thumbnail-url-10.com", "DSA", "Arrays and Linked Lists"),
    course("DSA Course 3", "https://sample-video-url-11.com", "https://sample-thumbnail-url-11.com", "DSA", "Stacks and Queues"),
    course("DSA Course 4", "https://sample-video-url-12.com", "https://sample-thumbnail-url-12.com", "DSA", "Trees and Graphs"),
    course("DSA Course 5", "https://sample-video-url-13.com", "https://sample-thumbnail-url-13.com", "DSA", "Dynamic Programming and Greedy Algorithms"),
    course("DSA Course 6", "https://sample-video-url-14.com", "https://sample-thumbnail-url-14.com", "DSA", "Backtracking Algorithms"),
    course("DSA Course 7", "https://sample-video-url-15.com", "https://sample-thumbnail-url-15.com", "DSA", "Binary Search Algorithms"),
    course("DSA Course 8", "https://sample-video-url-16.com", "https://sample-thumbnail-url-16.com", "DSA", "Advanced Graph Algorithms"),

    // DevOps
    course("DevOps Course 1", "https://sample-video-url-17.com", "https://sample-thumbnail-url-17.com", "DevOps", "Introduction to DevOps"),
    course("DevOps Course 2", "https://sample-video-url-18.com", "https://sample-thumbnail-url-18.com", "DevOps", "CI/CD Pipeline Basics"),
    course("DevOps Course 3", "https://sample-video-url-19.com", "https://sample-thumbnail-url-19.com", "DevOps", "Docker and Kubernetes for Beginners"),
    course("DevOps Course 4", "https://sample-video-url-20.com", "https://sample-thumbnail-url-20.com", "DevOps", "Automation with Ansible and Terraform"),
    course("DevOps Course 5", "https://sample-video-url-21.com", "https://sample-thumbnail-url-21.com", "DevOps", "Monitoring and Logging in DevOps"),
    course("DevOps Course 6", "https://sample-video-url-22.com", "https://sample-thumbnail-url-22.com", "DevOps", "Infrastructure as Code with Terraform"),
    course("DevOps Course 7", "https://sample-video-url-23.com", "https://sample-thumbnail-url-23.com", "DevOps", "Cloud Infrastructure Automation"),
    course("DevOps Course 8", "https://sample-video-url-24.com", "https://sample-thumbnail-url-24.com", "DevOps", "Continuous Monitoring and Feedback"),

    // Cloud Computing
    course("Cloud Computing Course 1", "https://sample-video-url-25.com", "https://sample-thumbnail-url-25.com", "Cloud Computing", "Introduction to Cloud Computing"),
    course("Cloud Computing Course 2", "https://sample-video-url-26.com", "https://sample-thumbnail-url-26.com", "Cloud Computing", "AWS Fundamentals"),
    course("Cloud Computing Course 3", "https://sample-video-url-27.com", "https://sample-thumbnail-url-27.com", "Cloud Computing", "Azure Fundamentals"),
    course("Cloud Computing Course 4", "https://sample-video-url-28.com", "https://sample-thumbnail-url-28.com", "Cloud Computing", "Google Cloud Platform Basics"),
    course("Cloud Computing Course 5", "https://sample-video-url-29.com", "https://sample-thumbnail-url-29.com", "Cloud Computing", "Serverless Architecture with AWS Lambda"),
    course("Cloud Computing Course 6", "https://sample-video-url-30.com", "https://sample-thumbnail-url-30.com", "Cloud Computing", "Cloud Security Essentials"),
    course("Cloud Computing Course 7", "https://sample-video-url-31.com", "https://sample-thumbnail-url-31.com", "Cloud Computing", "AWS EC2 and S3 Basics"),
    course("Cloud Computing Course 8", "https://sample-video-url-32.com", "https://sample-thumbnail-url-32.com", "Cloud Computing", "Advanced Cloud Architecture"),

    // AI/ML
    course("AI Course 1", "https://sample-video-url-33.com", "https://sample-thumbnail-url-33.com", "AI/ML", "AI Course 1"),
    course("AI Course 2", "https://sample-video-url-34.com", "https://sample-thumbnail-url-34.com", "AI/ML", "AI Course 2"),
    course("AI Course 3", "https://sample-video-url-35.com", "https://sample-thumbnail-url-35.com", "AI/ML", "AI Course 3"),
    course("AI Course 4", "https://sample-video-url-36.com", "https://sample-thumbnail-url-36.com", "AI/ML", "AI Course 4"),
    course("Machine Learning 1", "https://sample-video-url-37.com", "https://sample-thumbnail-url-37.com", "AI/ML", "ML Course 5"),
    course("Machine Learning 2", "https://sample-video-url-38.com", "https://sample-thumbnail-url-38.com", "AI/ML", "ML Course 6"),
    course("Machine Learning 3", "https://sample-video-url-39.com", "https://sample-thumbnail-url-39.com", "AI/ML", "ML Course 7"),
    course("Machine Learning 4", "https://sample-video-url-40.com", "https://sample-thumbnail-url-40.com", "AI/ML", "ML Course 8"),

    // Web Development
    course("Web Development Course 1", "https://sample-video-url-41.com", "https://sample-thumbnail-url-41.com", "Web Development", "Introduction to Web Development"),
    course("Web Development Course 2", "https://sample-video-url-42.com", "https://sample-thumbnail-url-42.com", "Web Development", "HTML and CSS Basics"),
    course("Web Development Course 3", "https://sample-video-url-43.com", "https://sample-thumbnail-url-43.com", "Web Development", "JavaScript and DOM Manipulation"),
    course("Web Development Course 4", "https://sample-video-url-44.com", "https://sample-thumbnail-url-44.com", "Web Development", "Responsive Web Design"),
    course("Web Development Course 5", "https://sample-video-url-45.com", "https://sample-thumbnail-url-45.com", "Web Development", "React.js Basics"),
    course("Web Development Course 6", "https://sample-video-url-46.com", "https://sample-thumbnail-url-46.com", "Web Development", "Advanced JavaScript"),
    course("Web Development Course 7", "https://sample-video-url-47.com", "https://sample-thumbnail-url-47.com", "Web Development", "Node.js for Web Development"),
    course("Web Development Course 8", "https://sample-video-url-48.com", "https://sample-thumbnail-url-48.com", "Web Development", "Building Full-Stack Applications with MERN"),

    // Front End
    course("Front-End Course 1", "https://sample-video-url-49.com", "https://sample-thumbnail-url-49.com", "Front End", "Introduction to Front-End Development"),
    course("Front-End Course 2", "https://sample-video-url-50.com", "https://sample-thumbnail-url-50.com", "Front End", "HTML and CSS Basics"),
    course("Front-End Course 3", "https://sample-video-url-51.com", "https://sample-thumbnail-url-51.com", "Front End", "JavaScript for Front-End Developers"),
    course("Front-End Course 4", "https://sample-video-url-52.com", "https://sample-thumbnail-url-52.com", "Front End", "Responsive Web Design"),
    course("Front-End Course 5", "https://sample-video-url-53.com", "https://sample-thumbnail-url-53.com", "Front End", "React.js Basics"),
    course("Front-End Course 6", "https://sample-video-url-54.com", "https://sample-thumbnail-url-54.com", "Front End", "Vue.js Essentials"),
    course("Front-End Course 7", "https://sample-video-url-55.com", "https://sample-thumbnail-url-55.com", "Front End", "Building Front-End Applications with Angular"),
    course("Front-End Course 8", "https://sample-video-url-56.com", "https://sample-thumbnail-url-56.com", "Front End", "Front-End Performance Optimization"),

    // Back End
    course("Back-End Course 1", "https://sample-video-url-57.com", "https://sample-thumbnail-url-57.com", "Back End", "Introduction to Back-End Development"),
    course("Back-End Course 2", "https://sample-video-url-58.com", "https://sample-thumbnail-url-58.com", "Back End", "Node.js for Beginners"),
    course("Back-End Course 3", "https://sample-video-url-59.com", "https://sample-thumbnail-url-59.com", "Back End", "Building APIs with Express.js"),
    course("Back-End Course 4", "https://sample-video-url-60.com", "https://sample-thumbnail-url-60.com", "Back End", "Database Design with MongoDB"),
    course("Back-End Course 5", "https://sample-video-url-61.com", "https://sample-thumbnail-url-61.com", "Back End", "Authentication and Authorization Basics"),
    course("Back-End Course 6", "https://sample-video-url-62.com", "https://sample-thumbnail-url-62.com", "Back End", "Scaling Back-End Systems"),
    course("Back-End Course 7", "https://sample-video-url-63.com", "https://sample-thumbnail-url-63.com", "Back End", "Serverless Back-End Development"),
    course("Back-End Course 8", "https://sample-video-url-64.com", "https://sample-thumbnail-url-64.com", "Back End", "Advanced Back-End Security Practices"),

    // Cyber Security
    course("Cyber Security Course 1", "https://sample-video-url-65.com", "https://sample-thumbnail-url-65.com", "Cyber Security", "Introduction to Cyber Security"),
    course("Cyber Security Course 2", "https://sample-video-url-66.com", "https://sample-thumbnail-url-66.com", "Cyber Security", "Basics of Network Security"),
    course("Cyber Security Course 3", "https://sample-video-url-67.com", "https://sample-thumbnail-url-67.com", "Cyber Security", "Ethical Hacking Fundamentals"),
    course("Cyber Security Course 4", "https://sample-video-url-68.com", "https://sample-thumbnail-url-68.com", "Cyber Security", "Web Application Security"),
    course("Cyber Security Course 5", "https://sample-video-url-69.com", "https://sample-thumbnail-url-69.com", "Cyber Security", "Understanding Cryptography"),
    course("Cyber Security Course 6", "https://sample-video-url-70.com", "https://sample-thumbnail-url-70.com", "Cyber Security", "Incident Response and Forensics"),
    course("Cyber Security Course 7", "https://sample-video-url-71.com", "https://sample-thumbnail-url-71.com", "Cyber Security", "Securing Cloud Environments"),
    course("Cyber Security Course 8", "https://sample-video-url-72.com", "https://sample-thumbnail-url-72.com", "Cyber Security", "Penetration Testing Advanced Techniques"),
];

const fn course(
    title: &'static str,
    video_url: &'static str,
    thumbnail_url: &'static str,
    path: &'static str,
    description: &'static str,
) -> NewCourse<'static> {
    NewCourse {
        title,
        video_url,
        thumbnail_url: Some(thumbnail_url),
        path,
        description: Some(description),
    }
}
