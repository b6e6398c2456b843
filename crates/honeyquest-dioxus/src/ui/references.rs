//! Display names and hint texts for the known query types.

/// A human-friendly name for a query type, used in the intro sentence
/// "Assume you are a hacker seeing the following ...".
pub fn nice_query_type_name(query_type: &str) -> String {
    match query_type {
        "httpheaders" => "HTTP headers".to_string(),
        "htaccess" => ".htaccess file".to_string(),
        "filesystem" => "filesystem listing".to_string(),
        "networkrequests" => "network requests".to_string(),
        other => format!("{other} query"),
    }
}

pub fn type_description(query_type: &str) -> &'static str {
    match query_type {
        "httpheaders" => {
            "You either see HTTP response or request headers, but always without any payload"
        }
        "htaccess" => {
            "You see the configuration directives in an .htaccess file, \
             which is used to configure Apache web servers"
        }
        "filesystem" => {
            "You see the output of the command `ls -lah` listing the file type and permissions, \
             the number of links to the file, the owner, the group, the size, \
             the last modification date and the file name"
        }
        "networkrequests" => {
            "You see the network requests made by a web application, \
             listing the time in seconds since the start of the request, the request method, \
             the full URL, the response status code, and the response size, \
             if the response was not empty"
        }
        _ => "",
    }
}

pub fn exploit_description(query_type: &str) -> &'static str {
    match query_type {
        "httpheaders" => {
            "An exploit mark means that you see a vulnerability / or want to use this header in an attack"
        }
        "htaccess" => {
            "An exploit mark means that you see a vulnerability / want to access this path / or want to use it in an attack"
        }
        "filesystem" => {
            "An exploit mark means that you see a vulnerability / want to examine this file or directory / or attack it"
        }
        "networkrequests" => {
            "An exploit mark means that you see a vulnerability / want to access this path / or attack it"
        }
        _ => "Click to the left of a line to mark lines to exploit",
    }
}

pub fn trap_description(query_type: &str) -> &'static str {
    match query_type {
        "httpheaders" => "A trap mark means that you think this header is a trap you must avoid",
        "htaccess" => "A trap mark means that you think this directive is a trap you must avoid",
        "filesystem" => {
            "A trap mark means that you think this file or directory is a trap you must avoid"
        }
        "networkrequests" => {
            "A trap mark means that you think this request is a trap you must avoid"
        }
        _ => "Click to the right of a line to mark traps to avoid",
    }
}
