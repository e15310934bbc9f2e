//! The Smart Coach system architecture description.
//!
//! This module is a data literal: a straight-line sequence of node, cluster,
//! and edge declarations mirroring the three-tier Smart Coach deployment
//! (React frontend, Spring Boot backend, PostgreSQL database). There is no
//! computation here; layout and rendering are Graphviz's problem.

use archviz_core::{
    color::Color,
    identifier::Id,
    semantic::{
        Cluster, ClusterHints, Diagram, Direction, Edge, Element, GraphHints, Node, NodeKind,
        Splines,
    },
};

/// Title of the generated diagram.
pub const TITLE: &str = "Smart Coach System Architecture";

fn css(name: &str) -> Color {
    Color::new(name).expect("architecture colors are valid CSS color literals")
}

/// Build the fixed Smart Coach architecture diagram.
///
/// The returned diagram always validates: every edge connects nodes declared
/// below, and repeated calls produce an identical structure.
pub fn smart_coach() -> Diagram {
    let hints = GraphHints::default()
        .with_direction(Direction::TopToBottom)
        .with_splines(Splines::Ortho)
        .with_node_spacing(0.8)
        .with_rank_spacing(1.2)
        .with_padding(0.5);
    let mut diagram = Diagram::new(TITLE, hints);

    // Users
    let users = Id::new("users");

    // Frontend
    let react_app = Id::new("react_app");
    let auth_context = Id::new("auth_context");
    let login_page = Id::new("login_page");
    let signup_page = Id::new("signup_page");
    let dashboard_page = Id::new("dashboard_page");
    let goals_page = Id::new("goals_page");
    let workouts_page = Id::new("workouts_page");
    let diet_page = Id::new("diet_page");
    let profile_page = Id::new("profile_page");
    let api_service = Id::new("api_service");
    let auth_interceptor = Id::new("auth_interceptor");
    let mock_api = Id::new("mock_api");

    // Backend
    let spring_app = Id::new("spring_app");
    let jwt_filter = Id::new("jwt_filter");
    let auth_controller = Id::new("auth_controller");
    let token_service = Id::new("token_service");
    let goal_controller = Id::new("goal_controller");
    let workout_controller = Id::new("workout_controller");
    let meal_controller = Id::new("meal_controller");
    let user_controller = Id::new("user_controller");
    let dashboard_controller = Id::new("dashboard_controller");
    let nutrition_service = Id::new("nutrition_service");
    let user_repo = Id::new("user_repo");
    let goal_repo = Id::new("goal_repo");
    let workout_repo = Id::new("workout_repo");
    let meal_repo = Id::new("meal_repo");

    // Database
    let docker_db = Id::new("docker_db");
    let postgres = Id::new("postgres");
    let user_entity = Id::new("user_entity");
    let goal_entity = Id::new("goal_entity");
    let workout_entity = Id::new("workout_entity");
    let meal_entity = Id::new("meal_entity");

    diagram.push(Element::Node(Node::new(users, "Users", NodeKind::Client)));

    // Frontend Layer
    diagram.push(Element::Cluster(Cluster::new(
        Id::new("frontend"),
        "Frontend Layer (React - Port 3000)",
        ClusterHints::default().with_margin(15.0),
        vec![
            Element::Node(Node::new(react_app, "React App", NodeKind::Framework)),
            Element::Cluster(Cluster::new(
                Id::new("frontend_auth"),
                "Authentication",
                ClusterHints::default().with_margin(10.0),
                vec![
                    Element::Node(Node::new(
                        auth_context,
                        "Auth Context\n(JWT Storage)",
                        NodeKind::Script,
                    )),
                    Element::Node(Node::new(login_page, "Login Page", NodeKind::Script)),
                    Element::Node(Node::new(signup_page, "SignUp Page", NodeKind::Script)),
                ],
            )),
            Element::Cluster(Cluster::new(
                Id::new("frontend_components"),
                "Components",
                ClusterHints::default().with_margin(10.0).with_node_spacing(0.6),
                vec![
                    Element::Node(Node::new(
                        dashboard_page,
                        "Dashboard\nPage",
                        NodeKind::Script,
                    )),
                    Element::Node(Node::new(goals_page, "Goals\nPage", NodeKind::Script)),
                    Element::Node(Node::new(workouts_page, "Workouts\nPage", NodeKind::Script)),
                    Element::Node(Node::new(diet_page, "Diet Planner\nPage", NodeKind::Script)),
                    Element::Node(Node::new(profile_page, "Profile\nPage", NodeKind::Script)),
                ],
            )),
            Element::Cluster(Cluster::new(
                Id::new("frontend_api_client"),
                "API Client",
                ClusterHints::default().with_margin(10.0),
                vec![
                    Element::Node(Node::new(
                        api_service,
                        "API Service\n(HTTP Client)",
                        NodeKind::Script,
                    )),
                    Element::Node(Node::new(
                        auth_interceptor,
                        "Auth Interceptor\n(JWT Headers)",
                        NodeKind::Script,
                    )),
                    Element::Node(Node::new(
                        mock_api,
                        "Mock API\n(Development)",
                        NodeKind::Script,
                    )),
                ],
            )),
        ],
    )));

    // Backend Layer
    diagram.push(Element::Cluster(Cluster::new(
        Id::new("backend"),
        "Backend Layer (Spring Boot - Port 8080)",
        ClusterHints::default().with_margin(15.0),
        vec![
            Element::Node(Node::new(
                spring_app,
                "Spring Boot API\n(REST Endpoints)",
                NodeKind::Framework,
            )),
            Element::Cluster(Cluster::new(
                Id::new("backend_auth"),
                "Authentication",
                ClusterHints::default().with_margin(10.0),
                vec![
                    Element::Node(Node::new(
                        jwt_filter,
                        "JWT Filter\n(Token Validation)",
                        NodeKind::Service,
                    )),
                    Element::Node(Node::new(
                        auth_controller,
                        "Auth Controller\n(/login, /register)",
                        NodeKind::Service,
                    )),
                    Element::Node(Node::new(
                        token_service,
                        "Token Service\n(JWT Generation)",
                        NodeKind::Service,
                    )),
                ],
            )),
            Element::Cluster(Cluster::new(
                Id::new("backend_controllers"),
                "Controllers",
                ClusterHints::default().with_margin(10.0).with_node_spacing(0.6),
                vec![
                    Element::Node(Node::new(
                        goal_controller,
                        "Goal\nController",
                        NodeKind::Service,
                    )),
                    Element::Node(Node::new(
                        workout_controller,
                        "Workout\nController",
                        NodeKind::Service,
                    )),
                    Element::Node(Node::new(
                        meal_controller,
                        "Meal\nController",
                        NodeKind::Service,
                    )),
                    Element::Node(Node::new(
                        user_controller,
                        "User\nController",
                        NodeKind::Service,
                    )),
                    Element::Node(Node::new(
                        dashboard_controller,
                        "Dashboard\nController",
                        NodeKind::Service,
                    )),
                ],
            )),
            Element::Cluster(Cluster::new(
                Id::new("backend_services"),
                "Services",
                ClusterHints::default().with_margin(10.0),
                vec![Element::Node(Node::new(
                    nutrition_service,
                    "Nutrition\nService",
                    NodeKind::Service,
                ))],
            )),
            Element::Cluster(Cluster::new(
                Id::new("backend_repositories"),
                "Repositories",
                ClusterHints::default().with_margin(10.0).with_node_spacing(0.6),
                vec![
                    Element::Node(Node::new(user_repo, "User\nRepository", NodeKind::Service)),
                    Element::Node(Node::new(goal_repo, "Goal\nRepository", NodeKind::Service)),
                    Element::Node(Node::new(
                        workout_repo,
                        "Workout\nRepository",
                        NodeKind::Service,
                    )),
                    Element::Node(Node::new(meal_repo, "Meal\nRepository", NodeKind::Service)),
                ],
            )),
        ],
    )));

    // Database Layer
    diagram.push(Element::Cluster(Cluster::new(
        Id::new("database"),
        "Database Layer (PostgreSQL - Port 5432)",
        ClusterHints::default().with_margin(20.0),
        vec![
            Element::Node(Node::new(
                docker_db,
                "Docker Container",
                NodeKind::Container,
            )),
            Element::Node(Node::new(postgres, "PostgreSQL", NodeKind::Database)),
            Element::Cluster(Cluster::new(
                Id::new("entity_schema"),
                "Entity Schema",
                ClusterHints::default()
                    .with_margin(15.0)
                    .with_node_spacing(1.0)
                    .with_rank_spacing(1.5),
                vec![
                    Element::Node(Node::new(
                        user_entity,
                        "User Entity\n\n• userId (PK)\n• fullName\n• email\n• password\n• dateOfBirth\n• height\n• weight\n• profilePictureUrl",
                        NodeKind::Entity,
                    )),
                    Element::Node(Node::new(
                        goal_entity,
                        "Goal Entity\n\n• goalId (PK)\n• userId (FK)\n• type (ENUM)\n• title\n• description\n• targetValue\n• currentValue\n• targetDate\n• status (ENUM)",
                        NodeKind::Entity,
                    )),
                    Element::Node(Node::new(
                        workout_entity,
                        "Workout Entity\n\n• workoutId (PK)\n• userId (FK)\n• date\n• distance\n• avgHeartRate\n• calories\n• location\n• weatherTemp\n• weatherHumidity",
                        NodeKind::Entity,
                    )),
                    Element::Node(Node::new(
                        meal_entity,
                        "Meal Entity\n\n• mealId (PK)\n• userId (FK)\n• type\n• date\n• food\n• calories\n• protein\n• carbs\n• fat",
                        NodeKind::Entity,
                    )),
                ],
            )),
        ],
    )));

    // Frontend Authentication Flow
    diagram.connect_all([
        Edge::new(users, login_page)
            .with_label("Login/Register")
            .with_color(css("red")),
        Edge::new(users, signup_page)
            .with_label("Login/Register")
            .with_color(css("red")),
        Edge::new(login_page, auth_context)
            .with_label("Credentials")
            .with_color(css("red")),
        Edge::new(signup_page, auth_context)
            .with_label("Credentials")
            .with_color(css("red")),
    ]);

    // Frontend App Flow
    diagram.connect_all([
        Edge::new(users, react_app)
            .with_label("App Access")
            .with_color(css("blue")),
        Edge::new(react_app, auth_context),
        Edge::new(auth_context, dashboard_page),
        Edge::new(auth_context, goals_page),
        Edge::new(auth_context, workouts_page),
        Edge::new(auth_context, diet_page),
        Edge::new(auth_context, profile_page),
    ]);

    // API Client Flow
    diagram.connect_all([
        Edge::new(dashboard_page, api_service),
        Edge::new(goals_page, api_service),
        Edge::new(workouts_page, api_service),
        Edge::new(diet_page, api_service),
        Edge::new(profile_page, api_service),
        Edge::new(auth_context, auth_interceptor)
            .with_label("JWT Token")
            .with_color(css("purple")),
        Edge::new(auth_interceptor, api_service),
        Edge::new(api_service, mock_api),
    ]);

    // Backend Authentication Flow
    diagram.connect_all([
        Edge::new(api_service, auth_controller)
            .with_label("Auth Requests\n/api/auth/*")
            .with_color(css("red")),
        Edge::new(api_service, jwt_filter)
            .with_label("Protected API\nwith JWT")
            .with_color(css("green")),
        Edge::new(jwt_filter, token_service)
            .with_label("Token\nValidation")
            .with_color(css("purple")),
        Edge::new(jwt_filter, spring_app),
    ]);

    // Backend API Connections
    diagram.connect_all([
        Edge::new(spring_app, goal_controller),
        Edge::new(spring_app, workout_controller),
        Edge::new(spring_app, meal_controller),
        Edge::new(spring_app, user_controller),
        Edge::new(spring_app, dashboard_controller),
        Edge::new(auth_controller, token_service)
            .with_label("Generate\nJWT")
            .with_color(css("purple")),
    ]);

    // Service Layer
    diagram.connect(Edge::new(meal_controller, nutrition_service).with_color(css("orange")));

    // Repository Layer
    diagram.connect_all([
        Edge::new(auth_controller, user_repo).with_color(css("gray")),
        Edge::new(user_controller, user_repo).with_color(css("gray")),
        Edge::new(goal_controller, goal_repo).with_color(css("gray")),
        Edge::new(workout_controller, workout_repo).with_color(css("gray")),
        Edge::new(meal_controller, meal_repo).with_color(css("gray")),
        Edge::new(dashboard_controller, user_repo).with_color(css("gray")),
        Edge::new(dashboard_controller, goal_repo).with_color(css("gray")),
        Edge::new(dashboard_controller, workout_repo).with_color(css("gray")),
        Edge::new(dashboard_controller, meal_repo).with_color(css("gray")),
    ]);

    // Database Connections
    diagram.connect_all([
        Edge::new(user_repo, postgres)
            .with_label("JPA/Hibernate\nSQL Queries")
            .with_color(css("black")),
        Edge::new(goal_repo, postgres)
            .with_label("JPA/Hibernate\nSQL Queries")
            .with_color(css("black")),
        Edge::new(workout_repo, postgres)
            .with_label("JPA/Hibernate\nSQL Queries")
            .with_color(css("black")),
        Edge::new(meal_repo, postgres)
            .with_label("JPA/Hibernate\nSQL Queries")
            .with_color(css("black")),
        Edge::new(docker_db, postgres)
            .with_label("Container\nManagement")
            .with_color(css("darkgray")),
    ]);

    // Entity Relationships
    diagram.connect_all([
        Edge::new(postgres, user_entity),
        Edge::new(postgres, goal_entity),
        Edge::new(postgres, workout_entity),
        Edge::new(postgres, meal_entity),
    ]);

    // Foreign Key Relationships
    diagram.connect_all([
        Edge::new(user_entity, goal_entity)
            .with_label("1:N\ngoals")
            .with_color(css("darkblue"))
            .dashed(),
        Edge::new(user_entity, workout_entity)
            .with_label("1:N\nworkouts")
            .with_color(css("darkgreen"))
            .dashed(),
        Edge::new(user_entity, meal_entity)
            .with_label("1:N\nmeals")
            .with_color(css("darkorange"))
            .dashed(),
    ]);

    diagram
}
