//! Default canonical-variant synonym table.

use crate::types::SynonymGroup;

fn group(canonical: &str, variants: &[&str]) -> SynonymGroup {
    SynonymGroup {
        canonical: canonical.to_string(),
        variants: variants.iter().map(|v| v.to_string()).collect(),
    }
}

/// Default synonym groups. Every variant is stored lower-cased; lookups
/// happen against cleaned (lower-cased, trimmed, de-qualified) input.
pub fn synonym_groups() -> Vec<SynonymGroup> {
    vec![
        // Programming languages
        group("python", &["python", "python3", "python 3", "py", "python2"]),
        group(
            "javascript",
            &[
                "javascript", "js", "ecmascript", "es6", "es2015", "es2016", "es2017",
                "es2018", "es2019", "es2020", "es2021",
            ],
        ),
        group("typescript", &["typescript", "ts"]),
        group("java", &["java", "java se", "java ee"]),
        group("c++", &["c++", "cpp", "c plus plus", "cplusplus"]),
        group("c#", &["c#", "csharp", "c sharp"]),
        group("c", &["c", "c language"]),
        group("go", &["go", "golang"]),
        group("rust", &["rust", "rust lang"]),
        group("ruby", &["ruby", "ruby lang"]),
        group("php", &["php", "php7", "php8"]),
        group("swift", &["swift", "swift ui", "swiftui"]),
        group("kotlin", &["kotlin", "kotlin jvm"]),
        group("r", &["r", "r language", "r programming"]),
        group("scala", &["scala", "scala lang"]),
        group("perl", &["perl", "perl5"]),
        group("shell", &["shell", "bash", "zsh", "sh"]),
        group("powershell", &["powershell", "pwsh"]),
        // Frontend frameworks and libraries
        group("react", &["react", "reactjs", "react.js", "react js"]),
        group("vue", &["vue", "vuejs", "vue.js", "vue js"]),
        group("angular", &["angular", "angularjs", "angular.js", "angular js"]),
        group("svelte", &["svelte", "sveltejs"]),
        group("next.js", &["next.js", "nextjs", "next js", "next"]),
        group("nuxt", &["nuxt", "nuxtjs", "nuxt.js"]),
        group("gatsby", &["gatsby", "gatsbyjs"]),
        // Backend frameworks
        group("django", &["django", "django rest framework", "drf"]),
        group("flask", &["flask", "flask framework"]),
        group("fastapi", &["fastapi", "fast api"]),
        group("express", &["express", "expressjs", "express.js"]),
        group("nest.js", &["nest.js", "nestjs", "nest"]),
        group("spring", &["spring", "spring boot", "spring framework"]),
        group("asp.net", &["asp.net", "aspnet", "asp .net core"]),
        group("rails", &["rails", "ruby on rails", "ror"]),
        group("laravel", &["laravel", "laravel framework"]),
        // Databases
        group("postgresql", &["postgresql", "postgres", "pg", "pgsql"]),
        group("mysql", &["mysql", "my sql"]),
        group("mongodb", &["mongodb", "mongo"]),
        group("redis", &["redis", "redis cache"]),
        group("elasticsearch", &["elasticsearch", "elastic search", "es"]),
        group("cassandra", &["cassandra", "apache cassandra"]),
        group("dynamodb", &["dynamodb", "dynamo db", "amazon dynamodb"]),
        group("sqlite", &["sqlite", "sqlite3"]),
        group("mariadb", &["mariadb", "maria db"]),
        group("oracle", &["oracle", "oracle db", "oracle database"]),
        group("mssql", &["mssql", "ms sql", "sql server", "microsoft sql server"]),
        // Cloud platforms
        group("aws", &["aws", "amazon web services", "amazon aws"]),
        group("azure", &["azure", "microsoft azure", "azure cloud"]),
        group("gcp", &["gcp", "google cloud", "google cloud platform"]),
        group("heroku", &["heroku", "heroku cloud"]),
        group("digitalocean", &["digitalocean", "digital ocean"]),
        // DevOps tooling
        group("docker", &["docker", "docker container"]),
        group("kubernetes", &["kubernetes", "k8s", "k8"]),
        group("jenkins", &["jenkins", "jenkins ci"]),
        group("gitlab", &["gitlab", "gitlab ci", "gitlab ci/cd"]),
        group("github actions", &["github actions", "gh actions"]),
        group("terraform", &["terraform"]),
        group("ansible", &["ansible", "ansible automation"]),
        group("circleci", &["circleci", "circle ci"]),
        // Machine learning and data science
        group("tensorflow", &["tensorflow", "tf", "tensor flow"]),
        group("pytorch", &["pytorch", "torch", "py torch"]),
        group("scikit-learn", &["scikit-learn", "sklearn", "scikit learn"]),
        group("pandas", &["pandas", "pandas library"]),
        group("numpy", &["numpy", "numerical python"]),
        group("keras", &["keras", "keras api"]),
        group("jupyter", &["jupyter", "jupyter notebook", "jupyterlab"]),
        // Testing
        group("pytest", &["pytest", "py.test"]),
        group("jest", &["jest", "jest testing"]),
        group("mocha", &["mocha", "mochajs"]),
        group("selenium", &["selenium", "selenium webdriver"]),
        group("cypress", &["cypress", "cypress.io"]),
        // Other tooling
        group("git", &["git", "git scm"]),
        group("graphql", &["graphql", "graph ql"]),
        group("rest", &["rest", "rest api", "restful", "restful api"]),
        group("grpc", &["grpc", "grpc api"]),
        group("websocket", &["websocket", "websockets", "web socket"]),
        group("tailwind", &["tailwind", "tailwindcss", "tailwind css"]),
        group("bootstrap", &["bootstrap", "bootstrap css"]),
        group("sass", &["sass", "scss"]),
        group("webpack", &["webpack", "webpack js"]),
        group("vite", &["vite", "vitejs"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_are_lowercase() {
        for group in synonym_groups() {
            for variant in &group.variants {
                assert_eq!(variant, &variant.to_lowercase());
            }
        }
    }

    #[test]
    fn test_no_variant_maps_to_two_canonicals() {
        use std::collections::HashMap;

        let mut seen: HashMap<String, String> = HashMap::new();
        for group in synonym_groups() {
            for variant in group.variants {
                if let Some(previous) = seen.insert(variant.clone(), group.canonical.clone()) {
                    panic!(
                        "variant '{}' maps to both '{}' and '{}'",
                        variant, previous, group.canonical
                    );
                }
            }
        }
    }
}
