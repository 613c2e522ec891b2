//! Project skeleton templates.
//!
//! Rendered with the project name as both `{{.Name}}` source and import
//! path, so every body refers to the Go module through the import-path
//! marker.

use layr_core::domain::{DatabaseKind, NameForm, ProjectFile, capabilities::DEFAULT_MODULE_NAME};

/// Replaced at table build time with the default module's type name.
const DEFAULT_MODULE: &str = "__DEFAULT_MODULE__";

pub(crate) fn body(file: ProjectFile) -> String {
    match file {
        ProjectFile::GoMod(db) => go_mod(db),
        ProjectFile::Main => {
            let module = NameForm::derive(DEFAULT_MODULE_NAME);
            MAIN.replace(DEFAULT_MODULE, module.capitalized())
        }
        ProjectFile::Database(db) => database(db),
        ProjectFile::Middleware => MIDDLEWARE.to_owned(),
        ProjectFile::Env(db) => env(db),
        ProjectFile::Makefile => MAKEFILE.to_owned(),
        ProjectFile::Gitignore => GITIGNORE.to_owned(),
        ProjectFile::Readme => README.to_owned(),
        ProjectFile::Dockerfile => DOCKERFILE.to_owned(),
    }
}

fn driver_module(db: DatabaseKind) -> &'static str {
    match db {
        DatabaseKind::Postgres => "gorm.io/driver/postgres",
        DatabaseKind::MySql => "gorm.io/driver/mysql",
    }
}

fn go_mod(db: DatabaseKind) -> String {
    let driver = match db {
        DatabaseKind::Postgres => "gorm.io/driver/postgres v1.5.6",
        DatabaseKind::MySql => "gorm.io/driver/mysql v1.5.4",
    };
    GO_MOD.replace("__DRIVER__", driver)
}

const GO_MOD: &str = "module __IMPORT_PATH__

go 1.21

require (
\tgithub.com/gorilla/mux v1.8.1
\tgithub.com/joho/godotenv v1.5.1
\t__DRIVER__
\tgorm.io/gorm v1.25.7
)
";

const MAIN: &str = r#"package main

import (
	"log"
	"net/http"
	"os"

	"github.com/gorilla/mux"
	"github.com/joho/godotenv"

	deliveryhttp "__IMPORT_PATH__/internal/delivery/http"
	"__IMPORT_PATH__/internal/entity"
	"__IMPORT_PATH__/internal/repository"
	"__IMPORT_PATH__/internal/usecase"
	"__IMPORT_PATH__/pkg/database"
	"__IMPORT_PATH__/pkg/middleware"
)

func main() {
	if err := godotenv.Load(); err != nil {
		log.Printf("no .env file found, using the process environment")
	}

	db, err := database.Connect()
	if err != nil {
		log.Fatalf("failed to connect to database: %v", err)
	}

	if err := database.AutoMigrate(db, &entity.__DEFAULT_MODULE__{}); err != nil {
		log.Fatalf("failed to run migrations: %v", err)
	}

	r := mux.NewRouter()
	r.Use(middleware.Logging)

	repo := repository.New__DEFAULT_MODULE__Repository(db)
	uc := usecase.New__DEFAULT_MODULE__Usecase(repo)
	deliveryhttp.New__DEFAULT_MODULE__Handler(uc).RegisterRoutes(r)

	port := os.Getenv("APP_PORT")
	if port == "" {
		port = "8080"
	}

	log.Printf("server listening on :%s", port)
	log.Fatal(http.ListenAndServe(":"+port, r))
}
"#;

fn database(db: DatabaseKind) -> String {
    let (open, dsn) = match db {
        DatabaseKind::Postgres => (
            "postgres.Open(dsn)",
            r#"fmt.Sprintf(
		"host=%s port=%s user=%s password=%s dbname=%s sslmode=%s",
		config.Host, config.Port, config.User, config.Password, config.DBName, config.SSLMode,
	)"#,
        ),
        DatabaseKind::MySql => (
            "mysql.Open(dsn)",
            r#"fmt.Sprintf(
		"%s:%s@tcp(%s:%s)/%s?charset=utf8mb4&parseTime=True&loc=Local",
		config.User, config.Password, config.Host, config.Port, config.DBName,
	)"#,
        ),
    };
    DATABASE
        .replace("__DRIVER__", driver_module(db))
        .replace("__OPEN__", open)
        .replace("__DSN__", dsn)
}

const DATABASE: &str = r#"package database

import (
	"fmt"
	"os"

	"__DRIVER__"
	"gorm.io/gorm"
)

// Config holds the connection settings read from the environment.
type Config struct {
	Host     string
	Port     string
	User     string
	Password string
	DBName   string
	SSLMode  string
}

// NewConfig reads the DB_* environment variables.
func NewConfig() *Config {
	return &Config{
		Host:     os.Getenv("DB_HOST"),
		Port:     os.Getenv("DB_PORT"),
		User:     os.Getenv("DB_USER"),
		Password: os.Getenv("DB_PASSWORD"),
		DBName:   os.Getenv("DB_NAME"),
		SSLMode:  os.Getenv("DB_SSL_MODE"),
	}
}

// Connect opens the database and configures the connection pool.
func Connect() (*gorm.DB, error) {
	config := NewConfig()

	dsn := __DSN__

	db, err := gorm.Open(__OPEN__, &gorm.Config{})
	if err != nil {
		return nil, fmt.Errorf("failed to connect to database: %w", err)
	}

	sqlDB, err := db.DB()
	if err != nil {
		return nil, fmt.Errorf("failed to get database instance: %w", err)
	}
	sqlDB.SetMaxIdleConns(10)
	sqlDB.SetMaxOpenConns(100)

	return db, nil
}

// AutoMigrate creates or updates the tables for the given models.
func AutoMigrate(db *gorm.DB, models ...any) error {
	return db.AutoMigrate(models...)
}
"#;

const MIDDLEWARE: &str = r#"package middleware

import (
	"log"
	"net/http"
	"time"
)

// Logging writes one line per request once the handler returns.
func Logging(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		start := time.Now()
		next.ServeHTTP(w, r)
		log.Printf("%s %s %s", r.Method, r.RequestURI, time.Since(start))
	})
}
"#;

fn env(db: DatabaseKind) -> String {
    let (port, user, password) = match db {
        DatabaseKind::Postgres => ("5432", "postgres", "postgres"),
        DatabaseKind::MySql => ("3306", "root", ""),
    };
    ENV.replace("__DB_PORT__", port)
        .replace("__DB_USER__", user)
        .replace("__DB_PASSWORD__", password)
}

const ENV: &str = "# Application
APP_NAME=__IMPORT_PATH__
APP_ENV=development
APP_PORT=8080

# Database
DB_HOST=localhost
DB_PORT=__DB_PORT__
DB_NAME=__IMPORT_PATH__
DB_USER=__DB_USER__
DB_PASSWORD=__DB_PASSWORD__
DB_SSL_MODE=disable

# JWT
JWT_SECRET=your-secret-key
JWT_EXPIRATION=24h

# Redis
REDIS_HOST=localhost
REDIS_PORT=6379
REDIS_PASSWORD=
REDIS_DB=0
";

const MAKEFILE: &str = "\
.PHONY: build run test clean deps lint dev migrate-create migrate-up migrate-down

# Build the application
build:
\tgo build -o bin/__IMPORT_PATH__ ./cmd

# Run the application
run:
\tgo run ./cmd

# Run tests
test:
\tgo test -v ./...

# Clean build artifacts
clean:
\trm -rf bin/

# Install dependencies
deps:
\tgo mod download
\tgo mod tidy

# Run linters
lint:
\tgo vet ./...
\tgolangci-lint run

# Build and run
dev: build
\t./bin/__IMPORT_PATH__

# Create a database migration: make migrate-create name=add_orders
migrate-create:
\tmigrate create -ext sql -dir migrations -seq $(name)

# Apply database migrations
migrate-up:
\tmigrate -path migrations -database \"$(DB_URL)\" up

# Roll back database migrations
migrate-down:
\tmigrate -path migrations -database \"$(DB_URL)\" down
";

const GITIGNORE: &str = "# Binaries
*.exe
*.exe~
*.dll
*.so
*.dylib
bin/

# Test binaries and coverage
*.test
*.out

# Dependencies
vendor/
go.work

# Editors
.idea/
.vscode/
*.swp
*.swo

# Environment
.env
.env.local

# Logs
*.log

# OS files
.DS_Store
Thumbs.db
";

const README: &str = "# __IMPORT_PATH__

A Go service laid out in clean-architecture layers, scaffolded by layr.

## Layout

```
.
├── cmd/                   # Entry point
├── internal/
│   ├── delivery/http/     # HTTP handlers
│   ├── repository/        # Persistence
│   ├── usecase/           # Business rules
│   └── entity/            # Records
└── pkg/
    ├── database/          # Connection and migrations
    └── middleware/        # HTTP middleware
```

## Running

```bash
cp .env.example .env   # then edit the database settings
make deps
make run
```

## Development

```bash
make test    # run tests
make lint    # go vet and golangci-lint
make build   # build bin/__IMPORT_PATH__
```

Add a full CRUD module with `layr module <name>`, or a single layer with
`layr generate <controller|repository|usecase> <name>`. Register new models
with `database.AutoMigrate` and new handlers in `cmd/main.go`.
";

const DOCKERFILE: &str = r#"FROM golang:1.21 AS builder

WORKDIR /app

# go.sum appears after the first `go mod tidy`
COPY go.mod go.sum* ./
RUN go mod download

COPY . .
RUN CGO_ENABLED=0 go build -o main ./cmd

FROM alpine:latest

WORKDIR /root/
COPY --from=builder /app/main .

EXPOSE 8080

CMD ["./main"]
"#;
