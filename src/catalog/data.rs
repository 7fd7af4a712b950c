//! Built-in role and synonym data.
//!
//! Role names and categories are display-cased; requirement entries are
//! stored lower-case because every matcher works on lower-cased text.

use super::RoleRecord;

fn role(
    name: &str,
    category: &str,
    skills: &[&str],
    tools: &[&str],
    soft_skills: &[&str],
    certifications: &[&str],
    keywords: &[&str],
) -> RoleRecord {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    RoleRecord {
        name: name.to_string(),
        category: category.to_string(),
        skills: owned(skills),
        tools: owned(tools),
        soft_skills: owned(soft_skills),
        certifications: owned(certifications),
        keywords: owned(keywords),
    }
}

pub(super) fn builtin_roles() -> Vec<RoleRecord> {
    vec![
        // Technology & software
        role(
            "Software Engineer",
            "Technology",
            &["python", "java", "javascript", "c++", "go", "rust", "typescript"],
            &["git", "github", "gitlab", "jenkins", "docker", "kubernetes", "ci/cd"],
            &["problem solving", "teamwork", "communication", "debugging"],
            &["aws certified developer", "google cloud certified", "microsoft certified"],
            &["development", "coding", "programming", "software", "backend", "frontend"],
        ),
        role(
            "Full Stack Developer",
            "Technology",
            &["react", "angular", "vue", "node.js", "express", "mongodb", "postgresql", "mysql"],
            &["webpack", "babel", "npm", "yarn", "docker", "git"],
            &["multitasking", "adaptability", "communication"],
            &["full stack certification", "react certification"],
            &["full stack", "web development", "frontend", "backend", "api"],
        ),
        role(
            "DevOps Engineer",
            "Technology",
            &["docker", "kubernetes", "terraform", "ansible", "jenkins", "ci/cd", "linux"],
            &["aws", "azure", "gcp", "prometheus", "grafana", "elk stack"],
            &["automation mindset", "collaboration", "problem solving"],
            &["aws devops", "kubernetes certified", "terraform associate"],
            &["devops", "automation", "infrastructure", "deployment", "monitoring"],
        ),
        role(
            "Cloud Architect",
            "Technology",
            &["aws", "azure", "gcp", "cloud architecture", "microservices", "serverless"],
            &["terraform", "cloudformation", "kubernetes", "docker"],
            &["strategic thinking", "communication", "leadership"],
            &["aws solutions architect", "azure architect", "gcp architect"],
            &["cloud", "architecture", "scalability", "infrastructure", "migration"],
        ),
        role(
            "Frontend Developer",
            "Technology",
            &["html", "css", "javascript", "react", "vue", "angular", "responsive design"],
            &["webpack", "babel", "npm", "git", "figma", "chrome devtools"],
            &["attention to detail", "creativity", "problem solving"],
            &["frontend certification", "react certification"],
            &["frontend", "ui development", "web development", "responsive", "javascript"],
        ),
        role(
            "Backend Developer",
            "Technology",
            &["python", "java", "node.js", "go", "sql", "api design", "microservices"],
            &["docker", "kubernetes", "postman", "git", "redis", "postgresql"],
            &["problem solving", "logical thinking", "teamwork"],
            &["backend certification", "cloud certifications"],
            &["backend", "api", "server", "database", "microservices"],
        ),
        role(
            "Mobile Developer",
            "Technology",
            &["swift", "kotlin", "react native", "flutter", "ios", "android"],
            &["xcode", "android studio", "firebase", "testflight", "git"],
            &["attention to detail", "problem solving", "creativity"],
            &["ios certification", "android certification"],
            &["mobile development", "ios", "android", "app development", "mobile"],
        ),
        role(
            "QA Engineer",
            "Technology",
            &["test automation", "selenium", "junit", "pytest", "test planning", "api testing"],
            &["selenium", "postman", "jira", "testng", "cypress", "jenkins"],
            &["attention to detail", "analytical thinking", "communication"],
            &["istqb", "selenium certification"],
            &["quality assurance", "testing", "automation", "qa", "test cases"],
        ),
        role(
            "Database Administrator",
            "Technology",
            &["sql", "database design", "performance tuning", "backup and recovery", "security"],
            &["mysql", "postgresql", "oracle", "mongodb", "sql server"],
            &["problem solving", "attention to detail", "analytical thinking"],
            &["oracle dba", "microsoft certified dba", "mongodb certified"],
            &["database administration", "dba", "sql", "database optimization", "data management"],
        ),
        role(
            "Network Engineer",
            "Technology",
            &["networking", "routing", "switching", "firewall", "tcp/ip", "vpn"],
            &["cisco", "juniper", "wireshark", "solarwinds", "prtg"],
            &["problem solving", "analytical thinking", "communication"],
            &["ccna", "ccnp", "network+", "juniper certification"],
            &["network engineering", "routing", "switching", "firewall", "infrastructure"],
        ),
        role(
            "Systems Administrator",
            "Technology",
            &["linux", "windows server", "active directory", "scripting", "virtualization"],
            &["vmware", "hyper-v", "powershell", "bash", "ansible"],
            &["problem solving", "multitasking", "communication"],
            &["linux+", "mcsa", "rhcsa", "vmware certified"],
            &["system administration", "infrastructure", "server management", "virtualization"],
        ),
        role(
            "Blockchain Developer",
            "Technology",
            &["blockchain", "solidity", "ethereum", "smart contracts", "web3", "cryptography"],
            &["truffle", "hardhat", "metamask", "ganache", "remix"],
            &["problem solving", "innovation", "analytical thinking"],
            &["blockchain certification", "ethereum certification"],
            &["blockchain", "smart contracts", "web3", "cryptocurrency", "defi"],
        ),
        role(
            "IoT Engineer",
            "Technology",
            &["iot", "embedded systems", "mqtt", "sensors", "raspberry pi", "arduino"],
            &["arduino ide", "raspberry pi", "node-red", "aws iot", "azure iot"],
            &["problem solving", "innovation", "analytical thinking"],
            &["iot certification", "embedded systems certification"],
            &["iot", "internet of things", "embedded systems", "sensors", "edge computing"],
        ),
        role(
            "Robotics Engineer",
            "Technology",
            &["robotics", "ros", "python", "c++", "computer vision", "control systems"],
            &["ros", "gazebo", "matlab", "solidworks", "opencv"],
            &["problem solving", "creativity", "analytical thinking"],
            &["robotics certification", "ros certification"],
            &["robotics", "automation", "ros", "computer vision", "mechatronics"],
        ),
        // Data & analytics
        role(
            "Data Engineer",
            "Data & Analytics",
            &["python", "sql", "spark", "hadoop", "kafka", "airflow", "etl"],
            &["databricks", "snowflake", "redshift", "bigquery", "azure data factory"],
            &["analytical thinking", "attention to detail", "communication"],
            &["databricks certified", "aws data analytics", "snowflake certified"],
            &["data pipeline", "etl", "data warehouse", "big data", "streaming"],
        ),
        role(
            "Data Scientist",
            "Data & Analytics",
            &["python", "r", "sql", "machine learning", "statistics", "pandas", "numpy", "scikit-learn"],
            &["jupyter", "tableau", "power bi", "git", "mlflow"],
            &["analytical thinking", "communication", "business acumen"],
            &["data science certification", "machine learning specialization"],
            &["data science", "analytics", "modeling", "prediction", "insights"],
        ),
        role(
            "Machine Learning Engineer",
            "Data & Analytics",
            &["python", "tensorflow", "pytorch", "scikit-learn", "deep learning", "mlops"],
            &["docker", "kubernetes", "mlflow", "wandb", "sagemaker"],
            &["innovation", "problem solving", "collaboration"],
            &["ml engineer certification", "tensorflow certified", "aws ml"],
            &["machine learning", "ml", "ai", "model deployment", "training"],
        ),
        role(
            "AI Engineer",
            "Data & Analytics",
            &["python", "nlp", "computer vision", "deep learning", "transformers", "llm"],
            &["hugging face", "openai api", "langchain", "pytorch", "tensorflow"],
            &["innovation", "research", "communication"],
            &["ai certification", "nlp specialization", "deep learning"],
            &["artificial intelligence", "ai", "nlp", "computer vision", "generative ai"],
        ),
        role(
            "Data Analyst",
            "Data & Analytics",
            &["sql", "excel", "python", "statistics", "data visualization"],
            &["tableau", "power bi", "looker", "google analytics", "excel"],
            &["analytical thinking", "communication", "attention to detail"],
            &["google data analytics", "tableau certified", "power bi certified"],
            &["data analysis", "reporting", "dashboards", "insights", "metrics"],
        ),
        // Cybersecurity
        role(
            "Security Engineer",
            "Cybersecurity",
            &["penetration testing", "vulnerability assessment", "siem", "firewall", "ids/ips"],
            &["wireshark", "metasploit", "burp suite", "nessus", "splunk"],
            &["attention to detail", "problem solving", "communication"],
            &["cissp", "ceh", "oscp", "security+", "cism"],
            &["security", "cybersecurity", "penetration testing", "vulnerability", "incident response"],
        ),
        role(
            "Security Analyst",
            "Cybersecurity",
            &["threat analysis", "incident response", "soc", "siem", "forensics"],
            &["splunk", "qradar", "crowdstrike", "carbon black", "wireshark"],
            &["analytical thinking", "attention to detail", "communication"],
            &["security+", "ceh", "gcih", "cissp"],
            &["security operations", "threat detection", "incident response", "soc"],
        ),
        // Design
        role(
            "UX Designer",
            "Design",
            &["user research", "wireframing", "prototyping", "user testing", "interaction design"],
            &["figma", "sketch", "adobe xd", "invision", "miro", "usertesting"],
            &["empathy", "communication", "creativity", "collaboration"],
            &["ux certification", "interaction design foundation"],
            &["ux", "user experience", "design thinking", "usability", "research"],
        ),
        role(
            "UI Designer",
            "Design",
            &["visual design", "typography", "color theory", "responsive design", "design systems"],
            &["figma", "sketch", "adobe creative suite", "principle", "framer"],
            &["creativity", "attention to detail", "communication"],
            &["ui design certification", "adobe certified"],
            &["ui", "user interface", "visual design", "mockups", "design system"],
        ),
        role(
            "Product Designer",
            "Design",
            &["ux design", "ui design", "prototyping", "user research", "product thinking"],
            &["figma", "sketch", "adobe xd", "framer", "protopie"],
            &["empathy", "strategic thinking", "collaboration", "communication"],
            &["product design certification", "ux certification"],
            &["product design", "end-to-end design", "user centered", "product strategy"],
        ),
        role(
            "Graphic Designer",
            "Design",
            &["adobe photoshop", "adobe illustrator", "adobe indesign", "branding", "typography"],
            &["adobe creative cloud", "canva", "affinity designer", "procreate"],
            &["creativity", "attention to detail", "time management"],
            &["adobe certified professional", "graphic design certification"],
            &["graphic design", "visual communication", "branding", "illustration"],
        ),
        // Marketing & sales
        role(
            "Digital Marketing Manager",
            "Marketing",
            &["seo", "sem", "google analytics", "social media marketing", "email marketing", "content marketing"],
            &["google ads", "facebook ads", "hubspot", "mailchimp", "semrush", "ahrefs"],
            &["creativity", "analytical thinking", "communication", "strategy"],
            &["google analytics", "google ads", "hubspot", "facebook blueprint"],
            &["digital marketing", "marketing campaigns", "lead generation", "conversion"],
        ),
        role(
            "Content Marketing Manager",
            "Marketing",
            &["content strategy", "seo", "copywriting", "content calendar", "analytics"],
            &["wordpress", "hubspot", "google analytics", "semrush", "canva"],
            &["creativity", "writing", "strategic thinking", "communication"],
            &["content marketing certification", "hubspot content marketing"],
            &["content marketing", "content strategy", "blog", "seo", "storytelling"],
        ),
        role(
            "Social Media Manager",
            "Marketing",
            &["social media strategy", "community management", "content creation", "analytics"],
            &["hootsuite", "buffer", "sprout social", "canva", "adobe creative suite"],
            &["creativity", "communication", "trend awareness", "adaptability"],
            &["social media marketing certification", "facebook blueprint"],
            &["social media", "community management", "engagement", "content creation"],
        ),
        role(
            "Sales Manager",
            "Sales",
            &["sales strategy", "team management", "crm", "forecasting", "negotiation"],
            &["salesforce", "hubspot", "pipedrive", "linkedin sales navigator"],
            &["leadership", "communication", "motivation", "strategic thinking"],
            &["salesforce certified", "sales management certification"],
            &["sales management", "team leadership", "revenue", "quota", "pipeline"],
        ),
        role(
            "Account Executive",
            "Sales",
            &["sales", "prospecting", "crm", "negotiation", "closing"],
            &["salesforce", "hubspot", "outreach", "linkedin sales navigator", "zoom"],
            &["communication", "persuasion", "resilience", "relationship building"],
            &["salesforce certified", "sales certification"],
            &["sales", "account management", "prospecting", "closing deals", "quota"],
        ),
        // Product
        role(
            "Product Manager",
            "Product",
            &["product strategy", "roadmap planning", "agile", "user stories", "market research"],
            &["jira", "confluence", "productboard", "aha", "figma", "amplitude"],
            &["strategic thinking", "communication", "leadership", "prioritization"],
            &["certified scrum product owner", "pragmatic marketing"],
            &["product management", "roadmap", "feature prioritization", "product strategy"],
        ),
        role(
            "Technical Product Manager",
            "Product",
            &["technical knowledge", "api design", "sql", "agile", "system design"],
            &["jira", "confluence", "postman", "swagger", "github"],
            &["technical communication", "problem solving", "leadership"],
            &["cspo", "technical product management"],
            &["technical pm", "api", "platform", "technical roadmap", "architecture"],
        ),
        role(
            "Product Marketing Manager",
            "Product",
            &["go-to-market strategy", "positioning", "messaging", "competitive analysis", "market research"],
            &["hubspot", "google analytics", "productboard", "salesforce"],
            &["strategic thinking", "communication", "storytelling", "collaboration"],
            &["product marketing certification", "pragmatic marketing"],
            &["product marketing", "gtm", "positioning", "launch", "messaging"],
        ),
        // Business & management
        role(
            "Business Analyst",
            "Business & Management",
            &["sql", "excel", "business intelligence", "requirements gathering", "process mapping"],
            &["power bi", "tableau", "jira", "confluence", "visio"],
            &["stakeholder management", "communication", "critical thinking"],
            &["cbap", "pmi-pba", "six sigma"],
            &["business analysis", "requirements", "process improvement", "stakeholder"],
        ),
        // Healthcare
        role(
            "Data Analyst (Healthcare)",
            "Healthcare",
            &["sql", "excel", "healthcare analytics", "hipaa", "clinical data"],
            &["epic", "cerner", "tableau", "power bi", "sas"],
            &["attention to detail", "communication", "analytical thinking"],
            &["cahims", "chda", "healthcare analytics"],
            &["healthcare analytics", "clinical data", "patient outcomes", "hipaa"],
        ),
        role(
            "Healthcare Administrator",
            "Healthcare",
            &["healthcare management", "hipaa", "operations", "compliance", "budgeting"],
            &["epic", "cerner", "meditech", "excel"],
            &["leadership", "communication", "organizational skills", "problem solving"],
            &["fache", "chc", "mha"],
            &["healthcare administration", "operations", "compliance", "patient care"],
        ),
        role(
            "Clinical Research Coordinator",
            "Healthcare",
            &["clinical trials", "gcp", "irb", "patient recruitment", "data collection"],
            &["rave", "medidata", "redcap", "ctms"],
            &["attention to detail", "communication", "organization", "ethics"],
            &["ccrp", "ccrc", "socra"],
            &["clinical research", "clinical trials", "gcp", "patient safety", "data management"],
        ),
        // Finance & accounting
        role(
            "Financial Analyst",
            "Finance",
            &["financial modeling", "excel", "forecasting", "budgeting", "variance analysis"],
            &["excel", "quickbooks", "sap", "oracle financials", "tableau"],
            &["analytical thinking", "attention to detail", "communication"],
            &["cfa", "cpa", "fmva"],
            &["financial analysis", "modeling", "forecasting", "budgeting", "variance"],
        ),
        role(
            "Investment Banker",
            "Finance",
            &["financial modeling", "valuation", "m&a", "due diligence", "pitchbook creation"],
            &["excel", "capital iq", "factset", "bloomberg terminal"],
            &["analytical thinking", "communication", "work ethic", "attention to detail"],
            &["cfa", "series 7", "series 63"],
            &["investment banking", "m&a", "valuation", "deal execution", "financial modeling"],
        ),
        role(
            "Accountant",
            "Finance",
            &["accounting", "gaap", "financial reporting", "reconciliation", "tax preparation"],
            &["quickbooks", "sap", "oracle", "excel", "sage"],
            &["attention to detail", "organization", "integrity", "communication"],
            &["cpa", "cma", "ea"],
            &["accounting", "financial statements", "reconciliation", "audit", "tax"],
        ),
        role(
            "Risk Analyst",
            "Finance",
            &["risk assessment", "quantitative analysis", "modeling", "compliance", "statistics"],
            &["sas", "r", "python", "excel", "tableau"],
            &["analytical thinking", "attention to detail", "communication"],
            &["frm", "prmia", "cfa"],
            &["risk management", "risk assessment", "compliance", "quantitative analysis"],
        ),
        // Operations & supply chain
        role(
            "Operations Manager",
            "Operations",
            &["operations management", "process improvement", "lean six sigma", "project management"],
            &["excel", "erp systems", "sap", "tableau", "project management tools"],
            &["leadership", "problem solving", "communication", "analytical thinking"],
            &["six sigma black belt", "pmp", "apics"],
            &["operations", "process improvement", "efficiency", "supply chain", "logistics"],
        ),
        role(
            "Supply Chain Manager",
            "Operations",
            &["supply chain management", "logistics", "inventory management", "procurement", "forecasting"],
            &["sap", "oracle scm", "tableau", "excel"],
            &["analytical thinking", "negotiation", "communication", "leadership"],
            &["apics cscp", "cpim", "six sigma"],
            &["supply chain", "logistics", "procurement", "inventory", "vendor management"],
        ),
        role(
            "Project Manager",
            "Operations",
            &["project management", "agile", "scrum", "risk management", "stakeholder management"],
            &["jira", "asana", "ms project", "monday.com", "confluence"],
            &["leadership", "communication", "organization", "problem solving"],
            &["pmp", "prince2", "csm", "safe"],
            &["project management", "agile", "scrum", "stakeholder", "delivery"],
        ),
        // Human resources
        role(
            "HR Manager",
            "Human Resources",
            &["talent management", "recruitment", "employee relations", "performance management", "hris"],
            &["workday", "bamboohr", "adp", "greenhouse", "lever"],
            &["communication", "empathy", "conflict resolution", "leadership"],
            &["sphr", "phr", "shrm-cp", "shrm-scp"],
            &["human resources", "talent management", "recruitment", "employee relations"],
        ),
        role(
            "Recruiter",
            "Human Resources",
            &["recruitment", "sourcing", "interviewing", "ats", "employer branding"],
            &["linkedin recruiter", "greenhouse", "lever", "workday", "jobvite"],
            &["communication", "relationship building", "persuasion", "organization"],
            &["shrm-cp", "airs certification", "linkedin certified"],
            &["recruitment", "talent acquisition", "sourcing", "interviewing", "hiring"],
        ),
        role(
            "Compensation and Benefits Analyst",
            "Human Resources",
            &["compensation analysis", "benefits administration", "market research", "excel"],
            &["workday", "sap", "payscale", "salary.com", "excel"],
            &["analytical thinking", "attention to detail", "communication"],
            &["ccp", "cbp", "shrm-cp"],
            &["compensation", "benefits", "salary analysis", "total rewards", "market pricing"],
        ),
        // Legal
        role(
            "Legal Counsel",
            "Legal",
            &["contract law", "legal research", "negotiation", "compliance", "risk management"],
            &["westlaw", "lexisnexis", "docusign", "clio"],
            &["analytical thinking", "communication", "attention to detail", "negotiation"],
            &["bar admission", "legal specialization"],
            &["legal counsel", "contracts", "compliance", "legal research", "negotiation"],
        ),
        role(
            "Paralegal",
            "Legal",
            &["legal research", "document preparation", "case management", "litigation support"],
            &["westlaw", "lexisnexis", "case management software", "e-discovery tools"],
            &["attention to detail", "organization", "communication", "research"],
            &["certified paralegal", "advanced paralegal certification"],
            &["paralegal", "legal support", "document preparation", "legal research"],
        ),
        // Engineering (non-software)
        role(
            "Mechanical Engineer",
            "Engineering",
            &["cad", "solidworks", "autocad", "fem analysis", "thermodynamics", "mechanics"],
            &["solidworks", "autocad", "ansys", "catia", "matlab"],
            &["problem solving", "analytical thinking", "teamwork", "creativity"],
            &["pe license", "certified solidworks professional"],
            &["mechanical engineering", "design", "manufacturing", "prototyping", "testing"],
        ),
        role(
            "Electrical Engineer",
            "Engineering",
            &["circuit design", "pcb design", "embedded systems", "power systems", "plc"],
            &["altium", "eagle", "matlab", "labview", "pspice"],
            &["analytical thinking", "problem solving", "attention to detail"],
            &["pe license", "certified automation professional"],
            &["electrical engineering", "circuit design", "power systems", "automation"],
        ),
        role(
            "Civil Engineer",
            "Engineering",
            &["structural analysis", "autocad", "civil 3d", "project management", "surveying"],
            &["autocad", "civil 3d", "revit", "sap2000", "etabs"],
            &["problem solving", "communication", "teamwork", "project management"],
            &["pe license", "leed certification"],
            &["civil engineering", "structural design", "construction", "infrastructure"],
        ),
        // Education
        role(
            "Instructional Designer",
            "Education",
            &["instructional design", "elearning", "learning management systems", "curriculum development"],
            &["articulate storyline", "adobe captivate", "canva", "lms platforms"],
            &["creativity", "communication", "organization", "empathy"],
            &["cptd", "instructional design certification"],
            &["instructional design", "elearning", "curriculum", "training", "education"],
        ),
        role(
            "Training and Development Manager",
            "Education",
            &["training program development", "lms", "needs assessment", "facilitation"],
            &["cornerstone", "workday learning", "articulate", "zoom"],
            &["leadership", "communication", "presentation", "coaching"],
            &["cptd", "training certification"],
            &["training and development", "learning", "employee development", "facilitation"],
        ),
        // Customer success & support
        role(
            "Customer Success Manager",
            "Customer Success",
            &["customer relationship management", "onboarding", "crm", "account management"],
            &["salesforce", "gainsight", "totango", "zendesk", "intercom"],
            &["communication", "empathy", "problem solving", "relationship building"],
            &["customer success certification", "salesforce certified"],
            &["customer success", "retention", "onboarding", "account management", "churn"],
        ),
        role(
            "Technical Support Engineer",
            "Customer Success",
            &["troubleshooting", "technical support", "ticketing systems", "linux", "networking"],
            &["zendesk", "jira", "servicenow", "ssh", "wireshark"],
            &["problem solving", "communication", "patience", "technical aptitude"],
            &["comptia a+", "network+", "itil"],
            &["technical support", "troubleshooting", "customer service", "issue resolution"],
        ),
    ]
}

/// Canonical skill name to known variant spellings.
pub(super) const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("python", &["python3", "py", "python programming"]),
    ("javascript", &["js", "javascript programming", "ecmascript"]),
    ("machine learning", &["ml", "statistical learning", "predictive modeling"]),
    ("deep learning", &["dl", "neural networks", "artificial neural networks"]),
    ("natural language processing", &["nlp", "text analytics", "text mining"]),
    ("computer vision", &["cv", "image processing", "visual recognition"]),
    ("sql", &["structured query language", "tsql", "plsql", "mysql", "postgresql"]),
    ("aws", &["amazon web services", "amazon aws"]),
    ("azure", &["microsoft azure", "azure cloud"]),
    ("gcp", &["google cloud platform", "google cloud"]),
    ("docker", &["containerization", "containers"]),
    ("kubernetes", &["k8s", "container orchestration"]),
    ("ci/cd", &["continuous integration", "continuous deployment", "cicd"]),
    ("agile", &["scrum", "agile methodology", "agile development"]),
    ("git", &["version control", "source control", "github", "gitlab"]),
    ("react", &["reactjs", "react.js"]),
    ("node.js", &["nodejs", "node"]),
    ("api", &["rest api", "restful api", "web service"]),
    ("tableau", &["tableau desktop", "tableau server"]),
    ("power bi", &["powerbi", "microsoft power bi"]),
    ("excel", &["microsoft excel", "ms excel", "spreadsheet"]),
];
